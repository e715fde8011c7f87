//! IGDB catalog API client.

mod client;
mod dto;

pub use client::{IGDB_API_BASE, IgdbClient, IgdbCredentials, decode_games, games_query};
