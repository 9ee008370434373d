//! SQLite-backed notification store implementation.

use super::models::NotificationRecord;
use super::schema::NOTIFICATIONS_VERSIONED_SCHEMAS;
use super::trait_def::{NotificationStore, MAX_STORED_NOTIFICATIONS};
use crate::sqlite_persistence::BASE_DB_VERSION;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, types::Type, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

/// SQLite-backed notification store.
#[derive(Clone)]
pub struct SqliteNotificationStore {
    read_conn: Arc<Mutex<Connection>>,
    write_conn: Arc<Mutex<Connection>>,
}

fn migrate_if_needed(conn: &mut Connection) -> Result<()> {
    let db_version: i64 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;

    let latest_version = NOTIFICATIONS_VERSIONED_SCHEMAS.len() - 1;
    let latest_schema = &NOTIFICATIONS_VERSIONED_SCHEMAS[latest_version];

    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
            [],
            |r| r.get(0),
        )
        .unwrap_or(0);

    if table_count == 0 {
        info!(
            "Creating notifications db schema at version {}",
            latest_version
        );
        latest_schema.create(conn)?;
        return Ok(());
    }

    let mut current_version = if db_version < BASE_DB_VERSION as i64 {
        0
    } else {
        (db_version - BASE_DB_VERSION as i64) as usize
    };

    if current_version >= latest_version {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for schema in NOTIFICATIONS_VERSIONED_SCHEMAS
        .iter()
        .skip(current_version + 1)
    {
        if let Some(migration_fn) = schema.migration {
            info!(
                "Migrating notifications db from version {} to {}",
                current_version, schema.version
            );
            migration_fn(&tx)?;
            current_version = schema.version;
        }
    }
    tx.pragma_update(None, "user_version", BASE_DB_VERSION + current_version)?;
    tx.commit()?;
    Ok(())
}

fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<NotificationRecord> {
    let category: String = row.get(1)?;
    let category = category.parse().map_err(|e: anyhow::Error| {
        rusqlite::Error::FromSqlConversionFailure(1, Type::Text, e.into())
    })?;

    let timestamp: String = row.get(4)?;
    let timestamp = DateTime::parse_from_rfc3339(&timestamp)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?
        .with_timezone(&Utc);

    let priority: String = row.get(6)?;
    let priority = priority.parse().map_err(|e: anyhow::Error| {
        rusqlite::Error::FromSqlConversionFailure(6, Type::Text, e.into())
    })?;

    Ok(NotificationRecord {
        id: row.get(0)?,
        category,
        title: row.get(2)?,
        message: row.get(3)?,
        timestamp,
        read: row.get::<_, i64>(5)? != 0,
        priority,
        action_url: row.get(7)?,
        icon: row.get(8)?,
        color: row.get(9)?,
    })
}

/// Drops every row older than the newest `MAX_STORED_NOTIFICATIONS`.
fn enforce_cap(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "DELETE FROM notifications
         WHERE id NOT IN (
             SELECT id FROM notifications ORDER BY timestamp DESC, id LIMIT ?1
         )",
        params![MAX_STORED_NOTIFICATIONS as i64],
    )?;
    Ok(())
}

const INSERT_SQL: &str = "INSERT OR REPLACE INTO notifications
     (id, category, title, message, timestamp, read, priority, action_url, icon, color)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";

impl SqliteNotificationStore {
    /// Create a new SqliteNotificationStore, creating or migrating the
    /// database file as needed.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path_ref = db_path.as_ref();

        let mut write_conn = Connection::open_with_flags(
            db_path_ref,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI
                | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .context("Failed to open notifications database")?;

        migrate_if_needed(&mut write_conn)?;

        let latest_schema =
            &NOTIFICATIONS_VERSIONED_SCHEMAS[NOTIFICATIONS_VERSIONED_SCHEMAS.len() - 1];
        latest_schema
            .validate(&write_conn)
            .context("Notifications db schema mismatch")?;

        write_conn
            .pragma_update(None, "journal_mode", "WAL")
            .context("Failed to set WAL mode on notifications write connection")?;

        let read_conn = Connection::open_with_flags(
            db_path_ref,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY
                | rusqlite::OpenFlags::SQLITE_OPEN_URI
                | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .context("Failed to open notifications database for reading")?;

        read_conn
            .pragma_update(None, "journal_mode", "WAL")
            .context("Failed to set WAL mode on notifications read connection")?;

        let count: i64 =
            read_conn.query_row("SELECT COUNT(*) FROM notifications", [], |r| r.get(0))?;
        info!("Notification store ready: {} stored notifications", count);

        Ok(Self {
            read_conn: Arc::new(Mutex::new(read_conn)),
            write_conn: Arc::new(Mutex::new(write_conn)),
        })
    }

    fn insert_record(
        stmt: &mut rusqlite::CachedStatement<'_>,
        record: &NotificationRecord,
    ) -> rusqlite::Result<()> {
        stmt.execute(params![
            record.id,
            record.category.as_str(),
            record.title,
            record.message,
            record.timestamp_rfc3339(),
            record.read as i64,
            record.priority.as_str(),
            record.action_url,
            record.icon,
            record.color,
        ])?;
        Ok(())
    }
}

impl NotificationStore for SqliteNotificationStore {
    fn get_all(&self) -> Result<Vec<NotificationRecord>> {
        let conn = self.read_conn.lock().unwrap();
        let mut stmt = conn.prepare_cached(
            "SELECT id, category, title, message, timestamp, read, priority, action_url, icon, color
             FROM notifications ORDER BY timestamp DESC, id",
        )?;
        let records = stmt
            .query_map([], row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    fn save(&self, record: &NotificationRecord) -> Result<()> {
        let conn = self.write_conn.lock().unwrap();
        let tx = conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(INSERT_SQL)?;
            Self::insert_record(&mut stmt, record)?;
        }
        enforce_cap(&tx)?;
        tx.commit()?;
        Ok(())
    }

    fn save_all(&self, records: &[NotificationRecord]) -> Result<()> {
        let conn = self.write_conn.lock().unwrap();
        let tx = conn.unchecked_transaction()?;
        {
            tx.execute("DELETE FROM notifications", [])?;
            let mut stmt = tx.prepare_cached(INSERT_SQL)?;
            for record in records {
                Self::insert_record(&mut stmt, record)?;
            }
        }
        enforce_cap(&tx)?;
        tx.commit()?;
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let conn = self.write_conn.lock().unwrap();
        conn.execute("DELETE FROM notifications WHERE id = ?1", params![id])?;
        Ok(())
    }

    fn clear_all(&self) -> Result<()> {
        let conn = self.write_conn.lock().unwrap();
        conn.execute("DELETE FROM notifications", [])?;
        Ok(())
    }

    fn mark_as_read(&self, id: &str) -> Result<()> {
        let conn = self.write_conn.lock().unwrap();
        conn.execute(
            "UPDATE notifications SET read = 1 WHERE id = ?1",
            params![id],
        )?;
        Ok(())
    }

    fn mark_all_as_read(&self) -> Result<()> {
        let conn = self.write_conn.lock().unwrap();
        conn.execute("UPDATE notifications SET read = 1", [])?;
        Ok(())
    }
}
