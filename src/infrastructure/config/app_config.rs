//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::pagination::DEFAULT_PAGE_SIZE;
use crate::infrastructure::cache::CACHE_FILE_NAME;
use crate::infrastructure::igdb::{IGDB_API_BASE, IgdbCredentials};

const APP_NAME: &str = "gameshelf";
const APP_QUALIFIER: &str = "io";
const APP_ORGANIZATION: &str = "gameshelf";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and overridden by CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Number of games requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Local cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,

    /// IGDB API configuration.
    #[serde(default)]
    pub api: ApiConfig,
}

/// Local cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Persist fetched games between sessions.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Cache file path. Defaults to the platform cache directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

/// IGDB API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Twitch client ID.
    #[serde(default)]
    pub client_id: Option<String>,

    /// Twitch app access token.
    #[serde(default)]
    pub bearer_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            client_id: None,
            bearer_token: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_base_url() -> String {
    IGDB_API_BASE.to_string()
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(page_size) = args.page_size {
            self.page_size = page_size;
        }
        if let Some(cache_path) = args.cache_path {
            self.cache.path = Some(cache_path);
        }
        if args.no_cache {
            self.cache.enabled = false;
        }
        if let Some(base_url) = args.base_url {
            self.api.base_url = base_url;
        }
        if let Some(client_id) = args.client_id {
            self.api.client_id = Some(client_id);
        }
        if let Some(bearer_token) = args.bearer_token {
            self.api.bearer_token = Some(bearer_token);
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("gameshelf.log"))
    }

    /// Returns default games cache path.
    #[must_use]
    pub fn default_cache_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.cache_dir().join(CACHE_FILE_NAME))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }

    /// Returns effective cache path, or `None` when caching is disabled.
    #[must_use]
    pub fn effective_cache_path(&self) -> Option<PathBuf> {
        if !self.cache.enabled {
            return None;
        }
        self.cache.path.clone().or_else(Self::default_cache_path)
    }

    /// Returns API credentials when both parts are configured.
    #[must_use]
    pub fn credentials(&self) -> Option<IgdbCredentials> {
        match (&self.api.client_id, &self.api.bearer_token) {
            (Some(client_id), Some(bearer_token)) => {
                IgdbCredentials::new(client_id.as_str(), bearer_token.as_str())
            }
            _ => None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            page_size: DEFAULT_PAGE_SIZE,
            cache: CacheConfig::default(),
            api: ApiConfig::default(),
        }
    }
}
