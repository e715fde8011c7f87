//! Cache that never holds anything.

use async_trait::async_trait;

use crate::domain::entities::{CacheRecord, Game};
use crate::domain::errors::GamesError;
use crate::domain::ports::GamesCachePort;

/// Stand-in cache used when no cache location is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGamesStore;

#[async_trait]
impl GamesCachePort for NullGamesStore {
    async fn retrieve(&self) -> Result<CacheRecord, GamesError> {
        Ok(CacheRecord::Absent)
    }

    async fn store(&self, _games: &[Game]) -> Result<(), GamesError> {
        Ok(())
    }
}
