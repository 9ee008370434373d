use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lingua_notify::config::{AppConfig, CliConfig, FileConfig};
use lingua_notify::notifications::{open_notification_store, NotificationService, StorageBackend};
use lingua_notify::server::{run_server, RequestsLoggingLevel};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Directory holding the notification store files
    /// (notifications.db / notifications.json).
    #[clap(value_parser = parse_path)]
    pub db_dir: PathBuf,

    /// Path to an optional TOML config file. Values set there override CLI
    /// arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// The storage backend to use for notifications.
    #[clap(long, default_value = "auto")]
    pub backend: StorageBackend,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };

    let cli_config = CliConfig {
        db_dir: Some(cli_args.db_dir),
        port: cli_args.port,
        logging_level: cli_args.logging_level,
        backend: cli_args.backend,
    };

    let config = AppConfig::resolve(&cli_config, file_config)?;

    info!("Opening notification store in {:?}...", config.db_dir);
    let store = open_notification_store(
        config.backend,
        &config.notifications_db_path(),
        &config.notifications_dump_path(),
    )?;
    let notifications = Arc::new(NotificationService::new(store));

    info!("Ready to serve at port {}!", config.port);
    run_server(notifications, config.logging_level, config.port).await
}
