//! Domain entity definitions.

mod cache_record;
mod game;

pub use cache_record::CacheRecord;
pub use game::{DEFAULT_COVER_SIZE, Game};
