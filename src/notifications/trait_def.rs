//! NotificationStore trait definition.

use anyhow::Result;

use super::models::NotificationRecord;

/// Maximum number of notifications a store retains. `save` and `save_all`
/// drop the oldest records beyond this bound; `delete`, `mark_as_read` and
/// `clear_all` do not re-check it.
pub const MAX_STORED_NOTIFICATIONS: usize = 100;

/// Trait for notification storage backends.
pub trait NotificationStore: Send + Sync {
    /// Get all stored notifications, ordered by timestamp DESC.
    fn get_all(&self) -> Result<Vec<NotificationRecord>>;

    /// Insert or replace a notification by id, then enforce the retention cap.
    fn save(&self, record: &NotificationRecord) -> Result<()>;

    /// Wholesale replace: drop the current collection and store the given
    /// records (capped to the retention bound, newest kept).
    fn save_all(&self, records: &[NotificationRecord]) -> Result<()>;

    /// Delete the notification with the given id. No-op if absent.
    fn delete(&self, id: &str) -> Result<()>;

    /// Delete every stored notification.
    fn clear_all(&self) -> Result<()>;

    /// Set `read` on the notification with the given id. No-op if absent.
    fn mark_as_read(&self, id: &str) -> Result<()>;

    /// Set `read` on every stored notification.
    fn mark_all_as_read(&self) -> Result<()>;
}
