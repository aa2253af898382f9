use std::time::Duration;

use reqwest::Client;

/// Shared HTTP client configuration for the catalog API.
pub struct FakeStoreClient {
    pub client: Client,
    pub base_url: String,
}

impl FakeStoreClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Returns the product listing endpoint URL.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }
}
