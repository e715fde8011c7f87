use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use gameshelf::application::ProviderAssembler;
use gameshelf::domain::ports::GamesCachePort;
use gameshelf::infrastructure::{
    AppConfig, CliArgs, IgdbClient, JsonGamesStore, NullGamesStore, StorageManager,
};
use gameshelf::presentation::{App, GameListViewModel};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();

    let storage = match &args.config {
        Some(path) => StorageManager::with_dir(
            path.parent()
                .map(std::path::Path::to_path_buf)
                .unwrap_or_default(),
        ),
        None => StorageManager::new()?,
    };
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    Ok(config)
}

fn create_app(config: &AppConfig) -> Result<App> {
    let credentials = config.credentials();
    if credentials.is_none() {
        warn!("No IGDB credentials configured, requests will likely be rejected");
    }

    let remote = Arc::new(IgdbClient::with_base_url(
        config.api.base_url.as_str(),
        credentials,
    )?);

    let cache: Arc<dyn GamesCachePort> = match config.effective_cache_path() {
        Some(path) => {
            info!(path = %path.display(), "Using games cache");
            Arc::new(JsonGamesStore::new(path))
        }
        None => {
            warn!("Games cache disabled");
            Arc::new(NullGamesStore)
        }
    };

    let assembler = ProviderAssembler::with_page_size(remote, cache, config.page_size)?;

    let view_model = GameListViewModel::new(
        Arc::new(assembler.cache_first()),
        Arc::new(assembler.caching_remote()),
    );

    Ok(App::new(view_model))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = load_config()?;
    init_logging(&config)?;

    info!(version = gameshelf::VERSION, page_size = config.page_size, "Starting Gameshelf");

    let app = create_app(&config)?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    app.run(stdin, tokio::io::stdout()).await
}
