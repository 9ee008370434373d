//! Optional TOML file configuration.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Values a TOML config file may set. Every field is optional; present
/// values override their CLI counterparts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub db_dir: Option<String>,
    pub port: Option<u16>,
    pub logging_level: Option<String>,
    pub backend: Option<String>,
}

impl FileConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {:?}", path.as_ref()))?;
        toml::from_str(&content).context("Failed to parse config file")
    }
}
