//! IGDB catalog HTTP client.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use tracing::{debug, warn};

use super::dto::{ErrorResponse, GameResponse};
use crate::domain::entities::Game;
use crate::domain::errors::GamesError;
use crate::domain::ports::RemoteGamesPort;

/// Default IGDB API base URL.
pub const IGDB_API_BASE: &str = "https://api.igdb.com/v4";
const USER_AGENT: &str = concat!("gameshelf/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Twitch application credentials sent with every IGDB request.
#[derive(Clone, PartialEq, Eq)]
pub struct IgdbCredentials {
    client_id: String,
    bearer_token: String,
}

impl IgdbCredentials {
    /// Creates credentials, rejecting blank values.
    #[must_use]
    pub fn new(client_id: impl Into<String>, bearer_token: impl Into<String>) -> Option<Self> {
        let client_id = client_id.into().trim().to_string();
        let bearer_token = bearer_token.into().trim().to_string();

        if client_id.is_empty() || bearer_token.is_empty() {
            return None;
        }

        Some(Self {
            client_id,
            bearer_token,
        })
    }

    /// Returns the client ID.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the bearer token masked for display.
    #[must_use]
    pub fn masked_token(&self) -> String {
        let len = self.bearer_token.chars().count();
        if len <= 8 {
            return "*".repeat(len);
        }

        let prefix: String = self.bearer_token.chars().take(4).collect();
        let suffix: String = self.bearer_token.chars().skip(len - 4).collect();
        format!("{prefix}...{suffix}")
    }

    fn authorization(&self) -> String {
        format!("Bearer {}", self.bearer_token)
    }
}

impl fmt::Debug for IgdbCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IgdbCredentials")
            .field("client_id", &self.client_id)
            .field("bearer_token", &self.masked_token())
            .finish()
    }
}

/// Builds the Apicalypse query for one page of games.
#[must_use]
pub fn games_query(limit: usize, offset: usize) -> String {
    format!("f name, rating, summary, cover.image_id; l {limit}; o {offset};")
}

/// Decodes a `/games` response body. Any malformed record fails the page.
///
/// # Errors
/// Returns [`GamesError::Decode`] if the body is not a valid list of games.
pub fn decode_games(body: &[u8]) -> Result<Vec<Game>, GamesError> {
    let records: Vec<GameResponse> =
        serde_json::from_slice(body).map_err(|e| GamesError::decode(e.to_string()))?;
    Ok(records.into_iter().map(Game::from).collect())
}

fn status_error(status: StatusCode, detail: Option<&str>) -> GamesError {
    let detail = detail.map_or_else(|| format!("HTTP {status}"), ToString::to_string);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            GamesError::network(format!("unauthorized: {detail}"))
        }
        StatusCode::TOO_MANY_REQUESTS => GamesError::network("rate limited by IGDB"),
        StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
            GamesError::network("IGDB is temporarily unavailable")
        }
        _ => GamesError::network(format!("unexpected response: {status} - {detail}")),
    }
}

fn transport_error(e: &reqwest::Error) -> GamesError {
    if e.is_timeout() {
        GamesError::network("request timed out")
    } else if e.is_connect() {
        GamesError::network("failed to connect to IGDB")
    } else {
        GamesError::network(e.to_string())
    }
}

/// IGDB remote games source.
pub struct IgdbClient {
    client: Client,
    base_url: String,
    credentials: Option<IgdbCredentials>,
}

impl IgdbClient {
    /// Creates client against the public IGDB API.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(credentials: Option<IgdbCredentials>) -> Result<Self, GamesError> {
        Self::with_base_url(IGDB_API_BASE, credentials)
    }

    /// Creates client with custom base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(
        base_url: impl Into<String>,
        credentials: Option<IgdbCredentials>,
    ) -> Result<Self, GamesError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GamesError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Returns the games endpoint URL.
    #[must_use]
    pub fn games_url(&self) -> String {
        format!("{}/games", self.base_url)
    }

    fn build_request(&self, limit: usize, offset: usize) -> reqwest::RequestBuilder {
        let request = self
            .client
            .post(self.games_url())
            .header(header::ACCEPT, "application/json")
            .body(games_query(limit, offset));

        match &self.credentials {
            Some(credentials) => request
                .header("Client-ID", credentials.client_id())
                .header(header::AUTHORIZATION, credentials.authorization()),
            None => request,
        }
    }
}

#[async_trait]
impl RemoteGamesPort for IgdbClient {
    async fn fetch_games(&self, limit: usize, offset: usize) -> Result<Vec<Game>, GamesError> {
        debug!(limit, offset, "Requesting games from IGDB");

        let response = self
            .build_request(limit, offset)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach IGDB");
                transport_error(&e)
            })?;

        let status = response.status();

        if !status.is_success() {
            let detail = response
                .json::<Vec<ErrorResponse>>()
                .await
                .ok()
                .and_then(|errors| errors.into_iter().next())
                .map(|error| match error.cause {
                    Some(cause) => format!("{}: {cause}", error.title),
                    None => error.title,
                });
            return Err(status_error(status, detail.as_deref()));
        }

        let body = response.bytes().await.map_err(|e| transport_error(&e))?;

        let games = decode_games(&body).map_err(|e| {
            warn!(error = %e, "Failed to decode IGDB response");
            e
        })?;

        debug!(count = games.len(), offset, "Received games from IGDB");

        Ok(games)
    }
}
