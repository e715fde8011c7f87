//! Wiring of the remote catalog, the local cache and the providers.

use std::sync::Arc;

use crate::domain::errors::GamesError;
use crate::domain::pagination::{DEFAULT_PAGE_SIZE, PaginatedAccumulator};
use crate::domain::ports::{GamesCachePort, RemoteGamesPort};

use super::{CacheFirstProvider, CachingRemoteProvider, LocalProvider, PrimaryWithFallbackProvider};

/// Builds providers sharing one remote catalog, cache and page size.
#[derive(Debug, Clone)]
pub struct ProviderAssembler {
    accumulator: PaginatedAccumulator,
}

impl ProviderAssembler {
    /// Creates assembler with the default page size.
    #[must_use]
    pub fn new(remote: Arc<dyn RemoteGamesPort>, cache: Arc<dyn GamesCachePort>) -> Self {
        Self {
            accumulator: PaginatedAccumulator::new(remote, cache),
        }
    }

    /// Creates assembler with a custom page size.
    ///
    /// # Errors
    /// Returns error if `page_size` is zero.
    pub fn with_page_size(
        remote: Arc<dyn RemoteGamesPort>,
        cache: Arc<dyn GamesCachePort>,
        page_size: usize,
    ) -> Result<Self, GamesError> {
        Ok(Self {
            accumulator: PaginatedAccumulator::with_page_size(remote, cache, page_size)?,
        })
    }

    /// Returns the shared page size.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.accumulator.page_size()
    }

    /// Provider for the initial load: cached games first, remote otherwise.
    #[must_use]
    pub fn cache_first(&self) -> CacheFirstProvider {
        CacheFirstProvider::new(self.accumulator.clone())
    }

    /// Provider for reloads: always restarts from the remote catalog.
    #[must_use]
    pub fn caching_remote(&self) -> CachingRemoteProvider {
        CachingRemoteProvider::new(self.accumulator.clone())
    }

    /// Local cache with the caching remote provider as fallback.
    #[must_use]
    pub fn local_with_remote_fallback(
        &self,
    ) -> PrimaryWithFallbackProvider<LocalProvider, CachingRemoteProvider> {
        PrimaryWithFallbackProvider::new(
            LocalProvider::new(self.accumulator.clone()),
            self.caching_remote(),
        )
    }
}
