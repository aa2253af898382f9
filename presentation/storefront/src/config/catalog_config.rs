use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Location of the remote product catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_BASE_URL: API root serving `/products` (default: "https://fakestoreapi.com")
    /// - CATALOG_TIMEOUT_SECS: Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let base_url = env::var("CATALOG_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = parse_timeout(env::var("CATALOG_TIMEOUT_SECS").ok().as_deref());

        Self { base_url, timeout }
    }
}

fn parse_timeout(raw: Option<&str>) -> Duration {
    let secs = raw
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}
