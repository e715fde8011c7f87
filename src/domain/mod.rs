//! Domain layer with core entities, pagination and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Offset pagination and accumulation.
pub mod pagination;
/// Port definitions.
pub mod ports;

pub use entities::{CacheRecord, Game};
pub use errors::GamesError;
pub use pagination::{Continuation, DEFAULT_PAGE_SIZE, Page, PaginatedAccumulator};
pub use ports::{GamesCachePort, PageProvider, RemoteGamesPort};
