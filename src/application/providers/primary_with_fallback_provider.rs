//! Provider combinator that falls back on failure.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::errors::GamesError;
use crate::domain::pagination::Page;
use crate::domain::ports::PageProvider;

/// Tries `primary` and delegates to `fallback` on any error.
///
/// Stateless between calls; carries no pagination logic of its own.
#[derive(Debug, Clone)]
pub struct PrimaryWithFallbackProvider<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> PrimaryWithFallbackProvider<P, F>
where
    P: PageProvider,
    F: PageProvider,
{
    /// Creates new combinator.
    #[must_use]
    pub const fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl<P, F> PageProvider for PrimaryWithFallbackProvider<P, F>
where
    P: PageProvider,
    F: PageProvider,
{
    async fn first_page(&self) -> Result<Page, GamesError> {
        match self.primary.first_page().await {
            Ok(page) => Ok(page),
            Err(e) => {
                debug!(error = %e, "Primary provider failed, using fallback");
                self.fallback.first_page().await
            }
        }
    }
}
