use url::Url;

use super::errors::ProductError;
use super::value_objects::{Price, ProductId};

/// A catalog entry. Read-only for the whole lifetime of the storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub category: String,
    pub description: String,
    pub image: Url,
    pub price: Price,
    pub title: String,
}

pub struct NewProductProps {
    pub id: u64,
    pub category: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub title: String,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let price = Price::new(props.price)?;
        let image = Url::parse(&props.image).map_err(|_| ProductError::InvalidImageUri)?;

        Ok(Self {
            id: ProductId::new(props.id),
            category: props.category,
            description: props.description,
            image,
            price,
            title: props.title,
        })
    }
}
