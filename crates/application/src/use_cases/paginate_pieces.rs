//! Paginate pieces use case.
//!
//! Turns the paged collection listing into batches of display-ready pieces.
//! Listing pages yield detail URLs; those are queued and resolved a batch at
//! a time, with every detail in a batch fetched concurrently.

use std::collections::VecDeque;

use futures_util::future::join_all;
use rijks_domain::{DEFAULT_BATCH_SIZE, LanguageResolutionPolicy, PageToken, Piece, Url};

use crate::error::PaginationError;
use crate::ports::PiecesLoader;

/// Pages through the collection in fixed-size batches.
///
/// All operations take `&mut self`, so a paginator has a single caller at a
/// time. Output pieces are independent values and can be shared freely.
pub struct PiecesPaginator<L> {
    loader: L,
    policy: LanguageResolutionPolicy,
    batch_size: usize,
    pending: VecDeque<Url>,
    next_page_token: Option<PageToken>,
}

impl<L: PiecesLoader> PiecesPaginator<L> {
    /// Creates a paginator with the default batch size.
    #[must_use]
    pub fn new(loader: L, policy: LanguageResolutionPolicy) -> Self {
        Self {
            loader,
            policy,
            batch_size: DEFAULT_BATCH_SIZE,
            pending: VecDeque::new(),
            next_page_token: None,
        }
    }

    /// Overrides the number of detail fetches per batch (at least one).
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Starts over from the first listing page and returns its first batch.
    ///
    /// # Errors
    /// Returns [`PaginationError::Unknown`] if the listing page cannot be
    /// loaded. Failed detail fetches are dropped from the batch instead.
    pub async fn load_initial_pieces(&mut self) -> Result<Vec<Piece>, PaginationError> {
        self.pending.clear();
        self.next_page_token = None;

        self.fetch_page().await?;
        Ok(self.process_next_batch().await)
    }

    /// Returns the next batch, fetching the next listing page when the queue
    /// has run dry.
    ///
    /// # Errors
    /// - [`PaginationError::NoMorePieces`] once the queue is empty and the
    ///   last page has been consumed; repeated until the next
    ///   [`Self::load_initial_pieces`]
    /// - [`PaginationError::Unknown`] if the next listing page cannot be loaded
    pub async fn load_more_pieces(&mut self) -> Result<Vec<Piece>, PaginationError> {
        if !self.has_more_pages() {
            return Err(PaginationError::NoMorePieces);
        }

        if self.pending.is_empty() {
            self.fetch_page().await?;
        }

        Ok(self.process_next_batch().await)
    }

    /// Returns false once the queue is empty and no further page exists.
    #[must_use]
    pub fn has_more_pages(&self) -> bool {
        !self.pending.is_empty() || self.next_page_token.is_some()
    }

    /// Number of detail URLs queued but not yet fetched.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Detail fetches per batch.
    #[must_use]
    pub const fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Returns the underlying loader.
    pub const fn loader(&self) -> &L {
        &self.loader
    }

    async fn fetch_page(&mut self) -> Result<(), PaginationError> {
        let page = self
            .loader
            .load_page(self.next_page_token.as_ref())
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "collection page failed to load");
                PaginationError::Unknown(e)
            })?;

        tracing::debug!(
            urls = page.urls.len(),
            has_next = page.next_page_token.is_some(),
            "collection page loaded"
        );
        self.pending = page.urls.into();
        self.next_page_token = page.next_page_token;
        Ok(())
    }

    async fn process_next_batch(&mut self) -> Vec<Piece> {
        let take = self.batch_size.min(self.pending.len());
        let batch: Vec<Url> = self.pending.drain(..take).collect();

        let loader = &self.loader;
        let results = join_all(batch.iter().map(|url| async move {
            match loader.load_detail(url).await {
                Ok(piece) => Some(piece),
                Err(e) => {
                    tracing::debug!(%url, error = %e, "dropping piece that failed to load");
                    None
                }
            }
        }))
        .await;

        let pieces: Vec<Piece> = results
            .into_iter()
            .flatten()
            .map(|piece| piece.localize(&self.policy))
            .collect();

        tracing::debug!(
            requested = batch.len(),
            loaded = pieces.len(),
            remaining = self.pending.len(),
            "batch processed"
        );
        pieces
    }
}
