use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "gameshelf",
    version,
    about = "Browse the IGDB game catalog from your terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Number of games requested per page.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub page_size: Option<usize>,

    /// Games cache file path.
    #[arg(long, value_name = "PATH")]
    pub cache_path: Option<PathBuf>,

    /// Disable the local games cache.
    #[arg(long)]
    pub no_cache: bool,

    /// IGDB API base URL.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Twitch client ID.
    #[arg(long, env = "IGDB_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Twitch app access token.
    #[arg(long, env = "IGDB_BEARER_TOKEN", hide_env_values = true)]
    pub bearer_token: Option<String>,
}
