//! Presentation layer with the list state machine and terminal front end.

/// Terminal application loop.
pub mod app;
/// Prompt commands.
pub mod commands;
/// Observable list state.
pub mod list_view_model;
/// Text rendering.
pub mod render;

pub use app::App;
pub use list_view_model::{GameListViewModel, ListState, LoadMore, PresentableGames};
pub use render::ListRenderer;
