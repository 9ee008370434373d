//! Notification service, the public-facing component of the store.
//!
//! The service preserves the original client's contract: storage failures
//! never cross this boundary. Every error is logged and the operation
//! completes without effect; callers receive no signal distinguishing a
//! silent no-op from a genuine success. The user-visible consequence of a
//! failure is data loss, which product owners have accepted for this layer.

use std::sync::Arc;
use tracing::warn;

use super::models::NotificationRecord;
use super::trait_def::NotificationStore;

/// Facade over the selected storage backend implementing the
/// absorb-and-log error policy.
pub struct NotificationService {
    store: Arc<dyn NotificationStore>,
}

impl NotificationService {
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        Self { store }
    }

    /// All stored notifications, newest first. Empty on storage failure.
    pub fn get_all(&self) -> Vec<NotificationRecord> {
        match self.store.get_all() {
            Ok(records) => records,
            Err(e) => {
                warn!("Failed to read notifications: {:#}", e);
                Vec::new()
            }
        }
    }

    /// Number of stored notifications not yet marked read.
    pub fn unread_count(&self) -> usize {
        self.get_all().iter().filter(|r| !r.read).count()
    }

    pub fn save(&self, record: &NotificationRecord) {
        if let Err(e) = self.store.save(record) {
            warn!("Failed to save notification {}: {:#}", record.id, e);
        }
    }

    pub fn save_all(&self, records: &[NotificationRecord]) {
        if let Err(e) = self.store.save_all(records) {
            warn!("Failed to save {} notifications: {:#}", records.len(), e);
        }
    }

    pub fn delete(&self, id: &str) {
        if let Err(e) = self.store.delete(id) {
            warn!("Failed to delete notification {}: {:#}", id, e);
        }
    }

    pub fn clear_all(&self) {
        if let Err(e) = self.store.clear_all() {
            warn!("Failed to clear notifications: {:#}", e);
        }
    }

    pub fn mark_as_read(&self, id: &str) {
        if let Err(e) = self.store.mark_as_read(id) {
            warn!("Failed to mark notification {} as read: {:#}", id, e);
        }
    }

    pub fn mark_all_as_read(&self) {
        if let Err(e) = self.store.mark_all_as_read() {
            warn!("Failed to mark notifications as read: {:#}", e);
        }
    }
}
