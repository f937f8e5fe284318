//! Feed state for list views.
//!
//! This module defines the state a collection list moves through while
//! pages are fetched, so a front end can render loading and error feedback.

use crate::piece::Piece;

/// Message shown when the feed cannot be loaded.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Current state of the collection feed.
///
/// - `Idle`: nothing requested yet
/// - `Loading`: first page in flight
/// - `Loaded`: pieces available, more may be appended
/// - `Error`: the first page failed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedState {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    /// The first page is being fetched.
    Loading,
    /// Pieces loaded so far.
    Loaded(Vec<Piece>),
    /// Loading the first page failed.
    Error(String),
}

impl FeedState {
    /// Creates the generic error state.
    #[must_use]
    pub fn failed() -> Self {
        Self::Error(GENERIC_FAILURE_MESSAGE.to_string())
    }

    /// Returns the loaded pieces, or an empty slice in any other state.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        match self {
            Self::Loaded(pieces) => pieces,
            _ => &[],
        }
    }

    /// Returns true while the first page is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
