//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It handles all HTTP communication with the collection API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rijks_application::ports::{HttpClient, HttpClientError};
use rijks_domain::{CollectionSettings, Url};

/// Maximum redirects followed per request.
const MAX_REDIRECTS: usize = 10;

/// HTTP client implementation using reqwest.
///
/// Wraps `reqwest::Client` and implements the `HttpClient` port from the
/// application layer. Non-success statuses are reported as errors.
pub struct ReqwestHttpClient {
    client: Client,
    timeout: Duration,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with default settings.
    ///
    /// Default configuration:
    /// - Request timeout: 30 seconds
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        Self::from_settings(&CollectionSettings::default())
    }

    /// Creates a client using the user agent and timeout from `settings`.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn from_settings(settings: &CollectionSettings) -> Result<Self, HttpClientError> {
        let timeout = Duration::from_secs(settings.effective_request_timeout_secs());
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .timeout(timeout)
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    /// Creates a new HTTP client with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(error: &reqwest::Error, timeout: Duration) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout {
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            };
        }

        if let Some(status) = error.status() {
            return HttpClientError::Status {
                status: status.as_u16(),
            };
        }

        if error.is_connect() {
            return HttpClientError::ConnectionFailed(error.to_string());
        }

        if error.is_builder() {
            return HttpClientError::InvalidUrl(error.to_string());
        }

        HttpClientError::Other(error.to_string())
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, HttpClientError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| Self::map_error(&e, self.timeout))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| HttpClientError::Other(format!("Failed to read body: {e}")))?;

        tracing::trace!(%url, bytes = body.len(), "response received");
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ReqwestHttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_uses_settings_timeout() {
        let settings = CollectionSettings {
            request_timeout_secs: 5,
            ..CollectionSettings::default()
        };
        let client = ReqwestHttpClient::from_settings(&settings).expect("client builds");
        assert_eq!(client.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_zero_timeout_is_raised_to_one_second() {
        let settings = CollectionSettings {
            request_timeout_secs: 0,
            ..CollectionSettings::default()
        };
        let client = ReqwestHttpClient::from_settings(&settings).expect("client builds");
        assert_eq!(client.timeout, Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        let client = ReqwestHttpClient::with_client(Client::new(), Duration::from_secs(1));
        let url = Url::parse("http://127.0.0.1:9/collection").expect("valid url");

        let result = client.get(&url).await;

        assert!(result.is_err());
    }
}
