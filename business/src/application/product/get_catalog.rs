use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::catalog::CatalogSource;
use crate::domain::product::errors::CatalogError;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::get_catalog::GetCatalogUseCase;

pub struct GetCatalogUseCaseImpl {
    pub source: Arc<dyn CatalogSource>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCatalogUseCase for GetCatalogUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, CatalogError> {
        self.logger.info("Fetching product catalog");
        let products = self.source.fetch_all().await.map_err(|e| {
            self.logger
                .error(&format!("Catalog request failed: {}", e));
            CatalogError::from(e)
        })?;
        self.logger
            .info(&format!("Loaded {} catalog products", products.len()));
        Ok(products)
    }
}
