//! Snapshot read back from the local games cache.

use super::Game;

/// Result of reading the local cache.
///
/// `Absent` means nothing was ever written; `Empty` means an empty list was
/// written. Both are treated as a cache miss by the providers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CacheRecord {
    /// No record has been written yet.
    #[default]
    Absent,
    /// A record exists but holds no games.
    Empty,
    /// A non-empty list of games.
    Present(Vec<Game>),
}

impl CacheRecord {
    /// Classifies an optional list of games.
    #[must_use]
    pub fn from_games(games: Option<Vec<Game>>) -> Self {
        match games {
            None => Self::Absent,
            Some(games) if games.is_empty() => Self::Empty,
            Some(games) => Self::Present(games),
        }
    }

    /// Returns true when the record holds at least one game.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Consumes the record and returns the cached games.
    #[must_use]
    pub fn into_games(self) -> Vec<Game> {
        match self {
            Self::Present(games) => games,
            Self::Absent | Self::Empty => Vec::new(),
        }
    }
}
