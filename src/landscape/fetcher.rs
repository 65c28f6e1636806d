use std::sync::Arc;

use crate::traits::{HttpClient, ReqwestClient};

use super::error::LandscapeError;
use super::parser::{parse_typed, parse_untyped};
use super::registry::{LandscapeRegistry, PropertyRegistry};

/// Location of the landscape document when `--url` is not given
pub const DEFAULT_CONFIG_URL: &str =
    "https://raw.githubusercontent.com/sklevenz/cf2go/master/landscape.json";

/// Retrieves the landscape document from a single URL.
///
/// Every load performs exactly one request; nothing is cached between calls.
pub struct ConfigFetcher {
    url: String,
    http_client: Arc<dyn HttpClient>,
}

impl ConfigFetcher {
    /// Create a fetcher with the default HTTP client
    pub fn new(url: &str) -> Self {
        Self::with_client(url, Arc::new(ReqwestClient))
    }

    /// Create a fetcher with a custom HTTP client (for testing)
    pub fn with_client(url: &str, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            url: url.to_string(),
            http_client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the raw document text
    pub fn fetch(&self) -> Result<String, LandscapeError> {
        tracing::debug!(url = %self.url, "fetching landscape configuration");
        let body = self.http_client.get(&self.url).inspect_err(|e| {
            tracing::debug!(url = e.url(), error = %e, "fetch failed");
        })?;
        tracing::debug!(bytes = body.len(), "received landscape configuration");
        Ok(body)
    }

    /// Fetch and decode into fixed-shape records
    pub fn load_registry(&self) -> Result<LandscapeRegistry, LandscapeError> {
        parse_typed(&self.fetch()?)
    }

    /// Fetch and decode keeping every property
    pub fn load_properties(&self) -> Result<PropertyRegistry, LandscapeError> {
        parse_untyped(&self.fetch()?)
    }
}
