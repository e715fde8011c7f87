//! Local games cache adapters.

mod json_games_store;
mod null_games_store;

pub use json_games_store::{CACHE_FILE_NAME, JsonGamesStore};
pub use null_games_store::NullGamesStore;
