//! SQLite schema definition for the notifications database.

use crate::sqlite_column;
use crate::sqlite_persistence::{Column, SqlType, Table, VersionedSchema};

/// Stored notifications, one row per record, keyed by the caller-assigned id.
///
/// Timestamps are fixed-width RFC 3339 UTC text, so the index order is
/// chronological. The `read` index is declared for filtered badge queries;
/// no current operation depends on it.
const NOTIFICATIONS_TABLE: Table = Table {
    name: "notifications",
    columns: &[
        sqlite_column!("id", &SqlType::Text, is_primary_key = true),
        sqlite_column!("category", &SqlType::Text, non_null = true),
        sqlite_column!("title", &SqlType::Text, non_null = true),
        sqlite_column!("message", &SqlType::Text, non_null = true),
        sqlite_column!("timestamp", &SqlType::Text, non_null = true),
        sqlite_column!("read", &SqlType::Integer, non_null = true, default_value = Some("0")),
        sqlite_column!("priority", &SqlType::Text, non_null = true),
        sqlite_column!("action_url", &SqlType::Text),
        sqlite_column!("icon", &SqlType::Text),
        sqlite_column!("color", &SqlType::Text),
    ],
    indices: &[
        ("idx_notifications_timestamp", "timestamp"),
        ("idx_notifications_read", "read"),
    ],
};

pub const NOTIFICATIONS_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    tables: &[NOTIFICATIONS_TABLE],
    migration: None,
}];
