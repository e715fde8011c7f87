//! Cache-first provider used for the initial load.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::entities::CacheRecord;
use crate::domain::errors::GamesError;
use crate::domain::pagination::{Page, PaginatedAccumulator};
use crate::domain::ports::PageProvider;

/// Serves cached games when there are any, otherwise bootstraps from the
/// remote catalog at offset zero.
///
/// Cache read failures never surface from this provider; they are logged and
/// treated like an empty cache.
#[derive(Debug, Clone)]
pub struct CacheFirstProvider {
    accumulator: PaginatedAccumulator,
}

impl CacheFirstProvider {
    /// Creates new provider.
    #[must_use]
    pub const fn new(accumulator: PaginatedAccumulator) -> Self {
        Self { accumulator }
    }
}

#[async_trait]
impl PageProvider for CacheFirstProvider {
    async fn first_page(&self) -> Result<Page, GamesError> {
        let record = match self.accumulator.cache().retrieve().await {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable games cache");
                CacheRecord::Absent
            }
        };

        match record {
            CacheRecord::Present(games) => {
                debug!(count = games.len(), "Serving games from local cache");
                let next = self.accumulator.continuation(games.clone());
                Ok(Page::new(games, Some(next)))
            }
            CacheRecord::Absent | CacheRecord::Empty => {
                debug!("Games cache empty, loading from remote catalog");
                self.accumulator.fetch_next(&[]).await
            }
        }
    }
}
