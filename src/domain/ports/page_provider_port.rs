//! First-page provider port definition.

use async_trait::async_trait;

use crate::domain::errors::GamesError;
use crate::domain::pagination::Page;

/// Port for anything able to produce the first page of games.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageProvider: Send + Sync {
    /// Produces the first page, with a continuation when more data may exist.
    async fn first_page(&self) -> Result<Page, GamesError>;
}
