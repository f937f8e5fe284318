//! Client Settings Domain Model
//!
//! Defines how the collection client reaches the museum API.

use serde::{Deserialize, Serialize};
use url::Url;

/// Collection listing endpoint used when nothing else is configured.
pub const DEFAULT_COLLECTION_URL: &str = "https://data.rijksmuseum.nl/search/collection";

/// Number of detail fetches per batch.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Settings for the collection client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionSettings {
    /// Collection listing endpoint.
    pub collection_url: Url,
    /// Detail fetches per batch.
    pub batch_size: usize,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for CollectionSettings {
    fn default() -> Self {
        Self {
            collection_url: default_collection_url(),
            batch_size: DEFAULT_BATCH_SIZE,
            request_timeout_secs: 30,
            user_agent: format!("rijks/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl CollectionSettings {
    /// Batch size clamped to at least one.
    #[must_use]
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.max(1)
    }

    /// Request timeout in seconds, clamped to at least one.
    #[must_use]
    pub fn effective_request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs.max(1)
    }
}

#[allow(clippy::expect_used)]
fn default_collection_url() -> Url {
    Url::parse(DEFAULT_COLLECTION_URL).expect("default collection URL is valid")
}
