//! User notifications module

mod factory;
mod file_store;
mod models;
mod schema;
mod service;
mod sqlite_store;
mod trait_def;

pub use factory::{open_notification_store, StorageBackend};
pub use file_store::FileNotificationStore;
pub use models::{
    truncate_to_millis, NotificationCategory, NotificationPriority, NotificationRecord,
};
pub use service::NotificationService;
pub use sqlite_store::SqliteNotificationStore;
pub use trait_def::{NotificationStore, MAX_STORED_NOTIFICATIONS};
