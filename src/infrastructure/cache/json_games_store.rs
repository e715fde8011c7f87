//! JSON file cache holding the full list of known games.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, trace};

use crate::domain::entities::{CacheRecord, Game};
use crate::domain::errors::GamesError;
use crate::domain::ports::GamesCachePort;

/// File name used inside the cache directory.
pub const CACHE_FILE_NAME: &str = "games.json";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CachedGame {
    id: i64,
    name: String,
    #[serde(default)]
    image_id: Option<String>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    description: Option<String>,
}

impl From<&Game> for CachedGame {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id(),
            name: game.name().to_string(),
            image_id: game.image_id().map(ToString::to_string),
            rating: game.rating(),
            description: game.description().map(ToString::to_string),
        }
    }
}

impl From<CachedGame> for Game {
    fn from(cached: CachedGame) -> Self {
        Self::new(
            cached.id,
            cached.name,
            cached.image_id,
            cached.rating,
            cached.description,
        )
    }
}

/// Games cache persisted as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonGamesStore {
    path: PathBuf,
}

impl JsonGamesStore {
    /// Creates store backed by `path`. The file is created on first store.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomically(path: &Path, content: &[u8]) -> std::io::Result<()> {
        let parent = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content)?;
        temp_file.flush()?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}

#[async_trait]
impl GamesCachePort for JsonGamesStore {
    async fn retrieve(&self) -> Result<CacheRecord, GamesError> {
        let content = match fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                trace!(path = %self.path.display(), "No games cache file");
                return Ok(CacheRecord::Absent);
            }
            Err(e) => {
                return Err(GamesError::cache_read(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )));
            }
        };

        let cached: Vec<CachedGame> = serde_json::from_slice(&content)
            .map_err(|e| GamesError::cache_read(format!("malformed cache file: {e}")))?;

        debug!(count = cached.len(), "Read games cache");

        Ok(CacheRecord::from_games(Some(
            cached.into_iter().map(Game::from).collect(),
        )))
    }

    async fn store(&self, games: &[Game]) -> Result<(), GamesError> {
        let cached: Vec<CachedGame> = games.iter().map(CachedGame::from).collect();
        let content = serde_json::to_vec(&cached)
            .map_err(|e| GamesError::cache_write(format!("failed to encode games: {e}")))?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::write_atomically(&path, &content))
            .await
            .map_err(|e| GamesError::cache_write(format!("cache write task failed: {e}")))?
            .map_err(|e| {
                GamesError::cache_write(format!("failed to write {}: {e}", self.path.display()))
            })?;

        debug!(count = games.len(), path = %self.path.display(), "Stored games cache");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_games() -> Vec<Game> {
        vec![
            Game::new(
                1,
                "Hades",
                Some("co39vc".to_string()),
                Some(93.2),
                Some("Defy the god of the dead.".to_string()),
            ),
            Game::new(2, "Celeste", None, None, None),
        ]
    }

    #[tokio::test]
    async fn test_missing_file_is_absent() {
        let dir = tempdir().unwrap();
        let store = JsonGamesStore::new(dir.path().join(CACHE_FILE_NAME));

        assert_eq!(store.retrieve().await.unwrap(), CacheRecord::Absent);
    }

    #[tokio::test]
    async fn test_store_then_retrieve() {
        let dir = tempdir().unwrap();
        let store = JsonGamesStore::new(dir.path().join(CACHE_FILE_NAME));

        store.store(&sample_games()).await.unwrap();

        assert_eq!(
            store.retrieve().await.unwrap(),
            CacheRecord::Present(sample_games())
        );
    }

    #[tokio::test]
    async fn test_store_overwrites_previous_record() {
        let dir = tempdir().unwrap();
        let store = JsonGamesStore::new(dir.path().join(CACHE_FILE_NAME));

        store.store(&sample_games()).await.unwrap();
        store.store(&sample_games()[1..]).await.unwrap();

        assert_eq!(
            store.retrieve().await.unwrap(),
            CacheRecord::Present(sample_games()[1..].to_vec())
        );
    }

    #[tokio::test]
    async fn test_empty_list_is_empty_record() {
        let dir = tempdir().unwrap();
        let store = JsonGamesStore::new(dir.path().join(CACHE_FILE_NAME));

        store.store(&[]).await.unwrap();

        assert_eq!(store.retrieve().await.unwrap(), CacheRecord::Empty);
    }

    #[tokio::test]
    async fn test_malformed_file_is_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CACHE_FILE_NAME);
        std::fs::write(&path, "[{\"id\": 1").unwrap();

        let store = JsonGamesStore::new(path);

        assert!(matches!(
            store.retrieve().await,
            Err(GamesError::CacheRead { .. })
        ));
    }

    #[tokio::test]
    async fn test_store_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("cache").join(CACHE_FILE_NAME);
        let store = JsonGamesStore::new(&path);

        store.store(&sample_games()).await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_record_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CACHE_FILE_NAME);
        let store = JsonGamesStore::new(&path);

        store.store(&sample_games()[..1]).await.unwrap();

        let value: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["imageId"], "co39vc");
        assert_eq!(value[0]["description"], "Defy the god of the dead.");
    }

    #[tokio::test]
    async fn test_unwritable_location_is_write_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let store = JsonGamesStore::new(blocker.join(CACHE_FILE_NAME));

        assert!(matches!(
            store.store(&sample_games()).await,
            Err(GamesError::CacheWrite { .. })
        ));
    }
}
