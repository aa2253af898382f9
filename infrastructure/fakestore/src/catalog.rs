use async_trait::async_trait;

use business::domain::errors::CatalogSourceError;
use business::domain::product::catalog::CatalogSource;
use business::domain::product::model::Product;

use crate::client::FakeStoreClient;
use crate::dto::ProductDto;

pub struct FakeStoreCatalog {
    client: FakeStoreClient,
}

impl FakeStoreCatalog {
    pub fn new(client: FakeStoreClient) -> Self {
        Self { client }
    }

    fn into_products(dtos: Vec<ProductDto>) -> Result<Vec<Product>, CatalogSourceError> {
        dtos.into_iter()
            .map(|dto| {
                let id = dto.id;
                dto.into_domain().map_err(|e| {
                    tracing::warn!(product_id = id, error = %e, "Rejected catalog record");
                    CatalogSourceError::InvalidRecord(e)
                })
            })
            .collect()
    }
}

#[async_trait]
impl CatalogSource for FakeStoreCatalog {
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogSourceError> {
        let url = self.client.products_url();
        tracing::debug!(%url, "Requesting catalog");

        let response = self
            .client
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Catalog request did not complete");
                CatalogSourceError::network()
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogSourceError::status(status.as_u16()));
        }

        let dtos = response.json::<Vec<ProductDto>>().await.map_err(|e| {
            tracing::warn!(error = %e, "Catalog response is not a product list");
            CatalogSourceError::decode()
        })?;

        Self::into_products(dtos)
    }
}
