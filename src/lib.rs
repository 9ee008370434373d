//! Lingua Notify Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod config;
pub mod notifications;
pub mod server;
pub mod sqlite_persistence;

// Re-export commonly used types for convenience
pub use notifications::{
    open_notification_store, FileNotificationStore, NotificationCategory, NotificationPriority,
    NotificationRecord, NotificationService, NotificationStore, SqliteNotificationStore,
    StorageBackend, MAX_STORED_NOTIFICATIONS,
};
pub use server::{run_server, RequestsLoggingLevel};
