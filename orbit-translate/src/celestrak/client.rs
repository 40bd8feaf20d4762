//! CelesTrak HTTP client.
//!
//! Fetches catalog pages as plain text. The catalog is unauthenticated and
//! every page is small, so the client is a thin wrapper around `reqwest`
//! with a timeout. No retries and no caching: a failed fetch aborts the run.

use tracing::debug;

use super::CatalogSource;
use super::error::CelestrakError;

/// Default base URL for the NORAD element-set index.
pub const DEFAULT_BASE_URL: &str = "http://celestrak.com/NORAD/elements/";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the CelesTrak client.
#[derive(Debug, Clone)]
pub struct CelestrakConfig {
    /// Base URL of the catalog index page
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl CelestrakConfig {
    /// Create a config pointing at the live catalog.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing, or a catalog mirror).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for CelestrakConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the CelesTrak element-set catalog.
#[derive(Debug, Clone)]
pub struct CelestrakClient {
    http: reqwest::Client,
    base_url: String,
}

impl CelestrakClient {
    /// Create a new catalog client with the given configuration.
    pub fn new(config: CelestrakConfig) -> Result<Self, CelestrakError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}

impl CatalogSource for CelestrakClient {
    fn index_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_page(&self, url: &str) -> Result<String, CelestrakError> {
        debug!("GET {url}");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(CelestrakError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
