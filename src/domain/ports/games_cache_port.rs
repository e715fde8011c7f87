//! Local games cache port definition.

use async_trait::async_trait;

use crate::domain::entities::{CacheRecord, Game};
use crate::domain::errors::GamesError;

/// Port for persisting the full list of known games.
///
/// Every `store` replaces the previous record entirely.
#[async_trait]
pub trait GamesCachePort: Send + Sync {
    /// Reads the cached record.
    async fn retrieve(&self) -> Result<CacheRecord, GamesError>;

    /// Overwrites the cached record with `games`.
    async fn store(&self, games: &[Game]) -> Result<(), GamesError>;
}
