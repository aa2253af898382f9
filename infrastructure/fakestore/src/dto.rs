use serde::Deserialize;

use business::domain::product::errors::ProductError;
use business::domain::product::model::{NewProductProps, Product};

/// One entry of the `/products` response. Extra fields such as `rating` are ignored.
#[derive(Debug, Deserialize)]
pub struct ProductDto {
    pub id: u64,
    pub category: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub title: String,
}

impl ProductDto {
    pub fn into_domain(self) -> Result<Product, ProductError> {
        Product::new(NewProductProps {
            id: self.id,
            category: self.category,
            description: self.description,
            image: self.image,
            price: self.price,
            title: self.title,
        })
    }
}
