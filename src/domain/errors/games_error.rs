//! Catalog and cache error types.

use thiserror::Error;

/// Errors raised while fetching, decoding or caching games.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum GamesError {
    #[error("network error while fetching games: {message}")]
    Network { message: String },

    #[error("failed to decode games: {message}")]
    Decode { message: String },

    #[error("failed to read games cache: {message}")]
    CacheRead { message: String },

    #[error("failed to write games cache: {message}")]
    CacheWrite { message: String },

    #[error("no cached games available")]
    CacheMiss,

    #[error("unexpected error: {message}")]
    Unexpected { message: String },
}

impl GamesError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates cache read error.
    #[must_use]
    pub fn cache_read(message: impl Into<String>) -> Self {
        Self::CacheRead {
            message: message.into(),
        }
    }

    /// Creates cache write error.
    #[must_use]
    pub fn cache_write(message: impl Into<String>) -> Self {
        Self::CacheWrite {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether error originated in the local cache.
    #[must_use]
    pub const fn is_cache_error(&self) -> bool {
        matches!(
            self,
            Self::CacheRead { .. } | Self::CacheWrite { .. } | Self::CacheMiss
        )
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(GamesError::cache_read("bad json"), true, false ; "cache_read")]
    #[test_case(GamesError::cache_write("disk full"), true, false ; "cache_write")]
    #[test_case(GamesError::CacheMiss, true, false ; "cache_miss")]
    #[test_case(GamesError::network("timeout"), false, true ; "network")]
    #[test_case(GamesError::decode("missing id"), false, false ; "decode")]
    fn test_error_classification(error: GamesError, cache: bool, network: bool) {
        assert_eq!(error.is_cache_error(), cache);
        assert_eq!(error.is_network_error(), network);
    }

    #[test]
    fn test_display_includes_message() {
        let error = GamesError::decode("missing field `name`");
        assert_eq!(
            error.to_string(),
            "failed to decode games: missing field `name`"
        );
    }
}
