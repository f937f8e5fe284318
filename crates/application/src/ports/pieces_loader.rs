//! Pieces loader port
//!
//! Loads collection listing pages and individual piece details from the
//! museum API.

use async_trait::async_trait;
use rijks_domain::{CollectionPage, LocalizedPiece, PageToken, Url};

use super::HttpClientError;

/// Errors that can occur while loading from the collection API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoaderError {
    /// The request itself failed.
    #[error("network error: {0}")]
    Network(#[from] HttpClientError),

    /// The response did not have the expected shape.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Source of collection pages and piece details.
///
/// Implementations are stateless; both operations may run concurrently.
#[async_trait]
pub trait PiecesLoader: Send + Sync {
    /// Loads one listing page. `None` requests the first page.
    ///
    /// # Errors
    /// Returns [`LoaderError::Network`] if the request fails and
    /// [`LoaderError::InvalidData`] if the page cannot be parsed.
    async fn load_page(&self, token: Option<&PageToken>) -> Result<CollectionPage, LoaderError>;

    /// Loads one piece, including its resolved image URL when available.
    ///
    /// # Errors
    /// Returns [`LoaderError::Network`] if the detail request fails and
    /// [`LoaderError::InvalidData`] if the detail document cannot be parsed.
    /// Failures while resolving the image never surface here.
    async fn load_detail(&self, url: &Url) -> Result<LocalizedPiece, LoaderError>;
}
