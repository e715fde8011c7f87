//! Offset pagination over the remote catalog with write-through caching.
//!
//! A [`Page`] is an immutable snapshot of every game accumulated so far plus an
//! optional [`Continuation`]. Invoking a continuation never mutates the page it
//! came from; it produces a new page, so earlier snapshots stay valid.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::Game;
use crate::domain::errors::GamesError;
use crate::domain::ports::{GamesCachePort, RemoteGamesPort};

/// Number of games requested per remote fetch.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Accumulated games plus the capability to fetch more.
#[derive(Debug, Clone)]
pub struct Page {
    items: Vec<Game>,
    next: Option<Continuation>,
}

impl Page {
    /// Creates a page.
    #[must_use]
    pub const fn new(items: Vec<Game>, next: Option<Continuation>) -> Self {
        Self { items, next }
    }

    /// Creates a terminal page with no continuation.
    #[must_use]
    pub const fn last(items: Vec<Game>) -> Self {
        Self { items, next: None }
    }

    /// Returns the accumulated games.
    #[must_use]
    pub fn items(&self) -> &[Game] {
        &self.items
    }

    /// Returns the continuation, if more data may exist.
    #[must_use]
    pub const fn next(&self) -> Option<&Continuation> {
        self.next.as_ref()
    }

    /// Returns true when a continuation is available.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.next.is_some()
    }

    /// Splits the page into its games and continuation.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Game>, Option<Continuation>) {
        (self.items, self.next)
    }
}

/// Deferred fetch of the next batch after an accumulated prefix.
///
/// Holds the accumulated games and the accumulator that owns the remote and
/// cache handles. The next offset is the number of accumulated games.
#[derive(Clone)]
pub struct Continuation {
    accumulated: Arc<[Game]>,
    accumulator: PaginatedAccumulator,
}

impl Continuation {
    /// Creates a continuation resuming after `accumulated`.
    #[must_use]
    pub fn new(accumulated: impl Into<Arc<[Game]>>, accumulator: PaginatedAccumulator) -> Self {
        Self {
            accumulated: accumulated.into(),
            accumulator,
        }
    }

    /// Offset the next remote fetch will use.
    #[must_use]
    pub fn next_offset(&self) -> usize {
        self.accumulated.len()
    }

    /// Page size of the owning accumulator.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.accumulator.page_size()
    }

    /// Games accumulated before this continuation.
    #[must_use]
    pub fn accumulated(&self) -> &[Game] {
        &self.accumulated
    }

    /// Fetches the next batch and returns the extended page.
    ///
    /// # Errors
    /// Returns error if the remote fetch or the cache write fails.
    pub async fn fetch_next(&self) -> Result<Page, GamesError> {
        self.accumulator.fetch_next(&self.accumulated).await
    }
}

impl fmt::Debug for Continuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Continuation")
            .field("next_offset", &self.next_offset())
            .field("page_size", &self.page_size())
            .finish_non_exhaustive()
    }
}

/// Drives remote fetches, appends each batch and persists the result.
#[derive(Clone)]
pub struct PaginatedAccumulator {
    remote: Arc<dyn RemoteGamesPort>,
    cache: Arc<dyn GamesCachePort>,
    page_size: usize,
}

impl fmt::Debug for PaginatedAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginatedAccumulator")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl PaginatedAccumulator {
    /// Creates accumulator with the default page size.
    #[must_use]
    pub fn new(remote: Arc<dyn RemoteGamesPort>, cache: Arc<dyn GamesCachePort>) -> Self {
        Self {
            remote,
            cache,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Creates accumulator with a custom page size.
    ///
    /// # Errors
    /// Returns error if `page_size` is zero.
    pub fn with_page_size(
        remote: Arc<dyn RemoteGamesPort>,
        cache: Arc<dyn GamesCachePort>,
        page_size: usize,
    ) -> Result<Self, GamesError> {
        if page_size == 0 {
            return Err(GamesError::unexpected("page size must be greater than zero"));
        }

        Ok(Self {
            remote,
            cache,
            page_size,
        })
    }

    /// Returns the configured page size.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the cache the accumulator writes through to.
    #[must_use]
    pub fn cache(&self) -> &dyn GamesCachePort {
        self.cache.as_ref()
    }

    /// Returns a continuation that resumes after `current`.
    #[must_use]
    pub fn continuation(&self, current: impl Into<Arc<[Game]>>) -> Continuation {
        Continuation::new(current, self.clone())
    }

    /// Fetches the batch following `current`, caches the merged list and
    /// returns it as a page.
    ///
    /// A batch shorter than the page size ends pagination. Nothing is
    /// written to the cache when the remote fetch fails, and a failed
    /// cache write fails the whole call.
    ///
    /// # Errors
    /// Returns error if the remote fetch or the cache write fails.
    pub async fn fetch_next(&self, current: &[Game]) -> Result<Page, GamesError> {
        let offset = current.len();

        debug!(offset, limit = self.page_size, "Fetching next batch of games");

        let batch = self
            .remote
            .fetch_games(self.page_size, offset)
            .await
            .map_err(|e| {
                warn!(offset, error = %e, "Remote fetch failed");
                e
            })?;

        let reached_end = batch.len() < self.page_size;
        let batch_len = batch.len();

        let mut merged = Vec::with_capacity(offset + batch_len);
        merged.extend_from_slice(current);
        merged.extend(batch);

        self.cache.store(&merged).await.map_err(|e| {
            warn!(count = merged.len(), error = %e, "Failed to persist accumulated games");
            e
        })?;

        debug!(
            fetched = batch_len,
            total = merged.len(),
            reached_end,
            "Accumulated games persisted"
        );

        if reached_end {
            Ok(Page::last(merged))
        } else {
            let next = self.continuation(merged.clone());
            Ok(Page::new(merged, Some(next)))
        }
    }
}
