use serde::Deserialize;

use crate::domain::entities::Game;

/// IGDB game record as returned by `POST /games`.
#[derive(Debug, Deserialize)]
pub struct GameResponse {
    /// IGDB game ID.
    pub id: i64,
    /// Game title.
    pub name: String,
    /// Cover image reference.
    #[serde(default)]
    pub cover: Option<CoverResponse>,
    /// Aggregated user rating (0-100).
    #[serde(default)]
    pub rating: Option<f64>,
    /// Short description.
    #[serde(default)]
    pub summary: Option<String>,
}

/// IGDB cover sub-record.
#[derive(Debug, Deserialize)]
pub struct CoverResponse {
    /// Image identifier used to build CDN URLs.
    #[serde(default)]
    pub image_id: Option<String>,
}

impl From<GameResponse> for Game {
    fn from(response: GameResponse) -> Self {
        Self::new(
            response.id,
            response.name,
            response.cover.and_then(|cover| cover.image_id),
            response.rating,
            response.summary,
        )
    }
}

/// IGDB error payload.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Error title.
    pub title: String,
    /// Optional cause.
    #[serde(default)]
    pub cause: Option<String>,
}
