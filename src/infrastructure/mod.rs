//! Infrastructure layer with external service adapters.

/// Local games cache.
pub mod cache;
/// Application configuration.
pub mod config;
/// IGDB catalog client.
pub mod igdb;

pub use cache::{JsonGamesStore, NullGamesStore};
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use igdb::{IgdbClient, IgdbCredentials};
