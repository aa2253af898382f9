use async_trait::async_trait;

use crate::domain::errors::CatalogSourceError;

use super::model::Product;

/// Read-only port to the remote product catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogSourceError>;
}
