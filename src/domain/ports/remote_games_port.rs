//! Remote catalog port definition.

use async_trait::async_trait;

use crate::domain::entities::Game;
use crate::domain::errors::GamesError;

/// Port for fetching one batch of games from the remote catalog.
#[async_trait]
pub trait RemoteGamesPort: Send + Sync {
    /// Fetches at most `limit` games starting at `offset`.
    async fn fetch_games(&self, limit: usize, offset: usize) -> Result<Vec<Game>, GamesError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Remote stub replaying queued responses and recording requests.
    #[derive(Default)]
    pub struct RemoteGamesStub {
        responses: Mutex<VecDeque<Result<Vec<Game>, GamesError>>>,
        requests: Mutex<Vec<(usize, usize)>>,
    }

    impl RemoteGamesStub {
        /// Creates stub with no queued responses.
        pub fn new() -> Self {
            Self::default()
        }

        /// Queues a successful batch.
        pub fn push_games(&self, games: Vec<Game>) {
            self.responses.lock().unwrap().push_back(Ok(games));
        }

        /// Queues a failure.
        pub fn push_error(&self, error: GamesError) {
            self.responses.lock().unwrap().push_back(Err(error));
        }

        /// Returns the `(limit, offset)` pairs requested so far.
        pub fn requests(&self) -> Vec<(usize, usize)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RemoteGamesPort for RemoteGamesStub {
        async fn fetch_games(&self, limit: usize, offset: usize) -> Result<Vec<Game>, GamesError> {
            self.requests.lock().unwrap().push((limit, offset));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GamesError::network("no stubbed response")))
        }
    }
}
