mod file_config;

pub use file_config::FileConfig;

use crate::notifications::StorageBackend;
use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub db_dir: Option<PathBuf>,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub backend: StorageBackend,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_dir: PathBuf,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub backend: StorageBackend,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let db_dir = file
            .db_dir
            .map(PathBuf::from)
            .or_else(|| cli.db_dir.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("db_dir must be specified on the command line or in config file")
            })?;

        if !db_dir.exists() {
            bail!("Database directory does not exist: {:?}", db_dir);
        }
        if !db_dir.is_dir() {
            bail!("db_dir is not a directory: {:?}", db_dir);
        }

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let backend = file
            .backend
            .and_then(|s| parse_backend(&s))
            .unwrap_or(cli.backend);

        Ok(Self {
            db_dir,
            port,
            logging_level,
            backend,
        })
    }

    /// The SQLite database file used by the structured backend.
    pub fn notifications_db_path(&self) -> PathBuf {
        self.db_dir.join("notifications.db")
    }

    /// The JSON dump file used by the flat fallback backend.
    pub fn notifications_dump_path(&self) -> PathBuf {
        self.db_dir.join("notifications.json")
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

/// Parses a backend string into StorageBackend.
fn parse_backend(s: &str) -> Option<StorageBackend> {
    StorageBackend::from_str(s, true).ok()
}
