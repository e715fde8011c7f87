//! Game catalog entry value object.

use std::hash::{Hash, Hasher};

const IGDB_IMAGE_BASE: &str = "https://images.igdb.com/igdb/image/upload";

/// Default cover size used by the list and detail views.
pub const DEFAULT_COVER_SIZE: &str = "cover_small_2x";

/// A single game from the catalog.
///
/// Games are immutable once decoded. The `id` is opaque to the pagination
/// pipeline; equality and hashing cover every field.
#[derive(Debug, Clone)]
pub struct Game {
    id: i64,
    name: String,
    image_id: Option<String>,
    rating: Option<f64>,
    description: Option<String>,
}

impl Game {
    /// Creates a new game.
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        image_id: Option<String>,
        rating: Option<f64>,
        description: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image_id,
            rating,
            description,
        }
    }

    /// Returns the catalog identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cover image reference, if any.
    #[must_use]
    pub fn image_id(&self) -> Option<&str> {
        self.image_id.as_deref()
    }

    /// Returns the aggregated rating (0-100), if any.
    #[must_use]
    pub const fn rating(&self) -> Option<f64> {
        self.rating
    }

    /// Returns the summary text, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Builds the cover image URL for the given IGDB size preset
    /// (e.g. `cover_small_2x`, `cover_big`).
    #[must_use]
    pub fn cover_url(&self, size: &str) -> Option<String> {
        self.image_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| format!("{IGDB_IMAGE_BASE}/t_{size}/{id}.jpg"))
    }
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.image_id == other.image_id
            && self.rating.map(f64::to_bits) == other.rating.map(f64::to_bits)
            && self.description == other.description
    }
}

impl Eq for Game {}

impl Hash for Game {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
        self.image_id.hash(state);
        self.rating.map(f64::to_bits).hash(state);
        self.description.hash(state);
    }
}
