//! Remote-only provider that always restarts from the first batch.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::errors::GamesError;
use crate::domain::pagination::{Page, PaginatedAccumulator};
use crate::domain::ports::PageProvider;

/// Fetches the first page from the remote catalog, caching as it goes.
#[derive(Debug, Clone)]
pub struct CachingRemoteProvider {
    accumulator: PaginatedAccumulator,
}

impl CachingRemoteProvider {
    /// Creates new provider.
    #[must_use]
    pub const fn new(accumulator: PaginatedAccumulator) -> Self {
        Self { accumulator }
    }
}

#[async_trait]
impl PageProvider for CachingRemoteProvider {
    async fn first_page(&self) -> Result<Page, GamesError> {
        debug!("Loading first page from remote catalog");
        self.accumulator.fetch_next(&[]).await
    }
}
