use std::sync::Arc;

use logger::TracingLogger;

use fakestore::catalog::FakeStoreCatalog;
use fakestore::client::FakeStoreClient;

use business::application::product::get_catalog::GetCatalogUseCaseImpl;
use business::domain::product::use_cases::get_catalog::GetCatalogUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub get_catalog_use_case: Arc<dyn GetCatalogUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let client = FakeStoreClient::new(config.catalog.base_url.clone(), config.catalog.timeout);
        let catalog_source = Arc::new(FakeStoreCatalog::new(client));

        // Catalog use cases
        let get_catalog_use_case = Arc::new(GetCatalogUseCaseImpl {
            source: catalog_source,
            logger,
        });

        Self {
            get_catalog_use_case,
        }
    }
}
