//! Factory function for creating notification store instances

use super::file_store::FileNotificationStore;
use super::sqlite_store::SqliteNotificationStore;
use super::trait_def::NotificationStore;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Which storage backend services the notification store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StorageBackend {
    /// Probe the SQLite store, fall back to the flat file store if it
    /// cannot be opened.
    Auto,
    /// SQLite only; opening failure is an error.
    Sqlite,
    /// Flat JSON file only.
    File,
}

impl Default for StorageBackend {
    fn default() -> Self {
        Self::Auto
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Create a notification store for the configured backend.
///
/// Selection happens once, before the server starts; every caller shares
/// the returned handle. In `auto` mode this never fails: any SQLite
/// opening error is logged and the flat file store takes over.
pub fn open_notification_store(
    backend: StorageBackend,
    db_path: &Path,
    dump_path: &Path,
) -> Result<Arc<dyn NotificationStore>> {
    match backend {
        StorageBackend::Auto => match SqliteNotificationStore::new(db_path) {
            Ok(store) => {
                info!("Using SQLite notification store at {:?}", db_path);
                Ok(Arc::new(store))
            }
            Err(e) => {
                warn!(
                    "Could not open SQLite notification store at {:?}, falling back to flat file store at {:?}: {:#}",
                    db_path, dump_path, e
                );
                Ok(Arc::new(FileNotificationStore::initialize(
                    dump_path.to_path_buf(),
                )))
            }
        },
        StorageBackend::Sqlite => {
            info!("Using SQLite notification store at {:?}", db_path);
            Ok(Arc::new(SqliteNotificationStore::new(db_path)?))
        }
        StorageBackend::File => {
            info!("Using flat file notification store at {:?}", dump_path);
            Ok(Arc::new(FileNotificationStore::initialize(
                dump_path.to_path_buf(),
            )))
        }
    }
}
