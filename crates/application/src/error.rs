//! Application error types

use thiserror::Error;

use crate::ports::LoaderError;

/// Errors from paging through the collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// Loading a listing page failed.
    #[error("failed to load collection page: {0}")]
    Unknown(#[source] LoaderError),

    /// Every page has been consumed.
    #[error("no more pieces")]
    NoMorePieces,
}

impl PaginationError {
    /// Returns true for the end-of-collection signal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::NoMorePieces)
    }
}

impl From<LoaderError> for PaginationError {
    fn from(error: LoaderError) -> Self {
        Self::Unknown(error)
    }
}

/// Result type alias for pagination operations.
pub type ApplicationResult<T> = Result<T, PaginationError>;
