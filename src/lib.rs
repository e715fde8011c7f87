//! Gameshelf - browse the IGDB game catalog from the terminal.
//!
//! Games are served from a local cache when one exists and fetched page by
//! page from IGDB otherwise. Every fetched page is written through to the
//! cache before it is shown.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the page providers.
pub mod application;
/// Domain layer containing entities, pagination, errors and ports.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing the list state machine and terminal UI.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "gameshelf";
