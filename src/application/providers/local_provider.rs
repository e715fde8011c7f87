//! Cache-only provider that resumes remote pagination on demand.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::CacheRecord;
use crate::domain::errors::GamesError;
use crate::domain::pagination::{Page, PaginatedAccumulator};
use crate::domain::ports::PageProvider;

/// Serves the cached games, failing with [`GamesError::CacheMiss`] when
/// there are none.
#[derive(Debug, Clone)]
pub struct LocalProvider {
    accumulator: PaginatedAccumulator,
}

impl LocalProvider {
    /// Creates new provider. The accumulator's cache is the one read from.
    #[must_use]
    pub const fn new(accumulator: PaginatedAccumulator) -> Self {
        Self { accumulator }
    }
}

#[async_trait]
impl PageProvider for LocalProvider {
    async fn first_page(&self) -> Result<Page, GamesError> {
        match self.accumulator.cache().retrieve().await? {
            CacheRecord::Present(games) => {
                debug!(count = games.len(), "Serving games from local cache");
                let next = self.accumulator.continuation(games.clone());
                Ok(Page::new(games, Some(next)))
            }
            CacheRecord::Absent | CacheRecord::Empty => Err(GamesError::CacheMiss),
        }
    }
}
