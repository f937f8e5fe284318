//! Browse collection use case.

use rijks_domain::{FeedState, Piece};

use crate::error::PaginationError;
use crate::ports::PiecesLoader;
use crate::use_cases::PiecesPaginator;

/// Drives a scrolling list of pieces on top of a [`PiecesPaginator`].
///
/// `load` fetches the first batch; `load_more` appends further batches until
/// the collection is exhausted. Only a failing first load is shown as an
/// error; a failing `load_more` leaves the list as it was.
pub struct BrowseCollection<L> {
    paginator: PiecesPaginator<L>,
    state: FeedState,
    has_more: bool,
    loading_more: bool,
}

impl<L: PiecesLoader> BrowseCollection<L> {
    /// Creates a new `BrowseCollection` use case.
    #[must_use]
    pub fn new(paginator: PiecesPaginator<L>) -> Self {
        Self {
            paginator,
            state: FeedState::Idle,
            has_more: true,
            loading_more: false,
        }
    }

    /// Current feed state.
    #[must_use]
    pub const fn state(&self) -> &FeedState {
        &self.state
    }

    /// Returns false once the paginator reported the end of the collection.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// True while a `load_more` call is fetching the next batch.
    #[must_use]
    pub const fn is_loading_more(&self) -> bool {
        self.loading_more
    }

    /// Loads the first batch, replacing whatever was shown before.
    pub async fn load(&mut self) -> &FeedState {
        self.state = FeedState::Loading;
        self.has_more = true;

        self.state = match self.paginator.load_initial_pieces().await {
            Ok(pieces) => FeedState::Loaded(pieces),
            Err(e) => {
                tracing::warn!(error = %e, "initial load failed");
                FeedState::failed()
            }
        };
        &self.state
    }

    /// Appends the next batch to a loaded feed.
    ///
    /// Does nothing unless the feed is loaded and more pieces are expected.
    pub async fn load_more(&mut self) -> &FeedState {
        if !self.has_more || !matches!(self.state, FeedState::Loaded(_)) {
            return &self.state;
        }

        self.loading_more = true;
        let result = self.paginator.load_more_pieces().await;
        self.loading_more = false;

        match result {
            Ok(new_pieces) => {
                if let FeedState::Loaded(pieces) = &mut self.state {
                    pieces.extend(new_pieces);
                }
            }
            Err(PaginationError::NoMorePieces) => {
                tracing::debug!("collection exhausted");
                self.has_more = false;
            }
            Err(e) => tracing::warn!(error = %e, "loading more pieces failed"),
        }
        &self.state
    }

    /// Returns the loaded piece at `index`.
    #[must_use]
    pub fn piece_at(&self, index: usize) -> Option<&Piece> {
        self.state.pieces().get(index)
    }
}
