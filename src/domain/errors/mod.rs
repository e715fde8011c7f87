//! Domain error types.

mod games_error;

pub use games_error::GamesError;
