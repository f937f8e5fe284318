//! HTTP client port
//!
//! The collection client only ever issues plain GET requests and reads the
//! whole body.

use async_trait::async_trait;
use rijks_domain::Url;

/// Errors raised by an [`HttpClient`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpClientError {
    /// The URL could not be used for a request.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete in time.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout that elapsed.
        timeout_ms: u64,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The server answered with a non-success status.
    #[error("unexpected HTTP status {status}")]
    Status {
        /// Response status code.
        status: u16,
    },

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for fetching remote documents.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Performs a GET request and returns the response body.
    ///
    /// # Errors
    /// Returns an error if the transport fails or the server does not answer
    /// with a success status.
    async fn get(&self, url: &Url) -> Result<Vec<u8>, HttpClientError>;
}
