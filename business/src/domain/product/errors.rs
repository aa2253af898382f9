#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.negative_price")]
    NegativePrice,
    #[error("product.invalid_image_uri")]
    InvalidImageUri,
}

/// Failure to obtain the catalog. The storefront never distinguishes causes
/// on screen; the variant only feeds the logs.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.unavailable")]
    Unavailable(#[from] crate::domain::errors::CatalogSourceError),
}
