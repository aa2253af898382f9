/// Errors raised by catalog source adapters.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum CatalogSourceError {
    #[error("catalog_source.network")]
    Network,
    #[error("catalog_source.status_{0}")]
    Status(u16),
    #[error("catalog_source.decode")]
    Decode,
    #[error("catalog_source.invalid_record")]
    InvalidRecord(#[source] crate::domain::product::errors::ProductError),
}

impl CatalogSourceError {
    pub fn network() -> Self {
        CatalogSourceError::Network
    }
    pub fn status(code: u16) -> Self {
        CatalogSourceError::Status(code)
    }
    pub fn decode() -> Self {
        CatalogSourceError::Decode
    }
}
