//! Flat-file notification store, the universal fallback backend.
//!
//! The whole collection lives as one JSON array in a single file, rewritten
//! on every mutation. A missing or unparseable file loads as the empty
//! collection. Mutations stage a new dump, write it to the file, and only
//! then swap the in-memory copy, so a failed write leaves the store
//! unchanged. Within one process the dump mutex serializes writers; two
//! processes sharing the same file can still lose updates to each other
//! (read-modify-write over the file is not atomic).

use super::models::{sort_newest_first, truncate_to_millis, NotificationRecord};
use super::trait_def::{NotificationStore, MAX_STORED_NOTIFICATIONS};
use anyhow::Result;
use std::{
    fs::File,
    io::{Read, Write},
    path::PathBuf,
    sync::Mutex,
};
use tracing::warn;

pub struct FileNotificationStore {
    file_path: PathBuf,
    dump: Mutex<Vec<NotificationRecord>>,
}

impl FileNotificationStore {
    fn load_dump_from_file(file_path: &PathBuf) -> Result<Vec<NotificationRecord>> {
        let mut file = File::open(file_path)?;

        let mut content = String::new();
        file.read_to_string(&mut content)?;

        Ok(serde_json::from_str(&content)?)
    }

    pub fn initialize(file_path: PathBuf) -> FileNotificationStore {
        let mut dump = match Self::load_dump_from_file(&file_path) {
            Ok(records) => records,
            Err(e) => {
                if file_path.exists() {
                    warn!(
                        "Could not load notifications dump from {:?}, starting empty: {}",
                        file_path, e
                    );
                }
                Vec::new()
            }
        };
        sort_newest_first(&mut dump);

        FileNotificationStore {
            file_path,
            dump: Mutex::new(dump),
        }
    }

    fn save_dump(&self, dump: &[NotificationRecord]) -> Result<()> {
        let json_string = serde_json::to_string_pretty(dump)?;
        let mut file = File::create(&self.file_path)?;
        file.write_all(json_string.as_bytes())?;
        Ok(())
    }
}

impl NotificationStore for FileNotificationStore {
    fn get_all(&self) -> Result<Vec<NotificationRecord>> {
        Ok(self.dump.lock().unwrap().clone())
    }

    fn save(&self, record: &NotificationRecord) -> Result<()> {
        let mut dump = self.dump.lock().unwrap();
        let mut staged = dump.clone();
        staged.retain(|r| r.id != record.id);
        let mut record = record.clone();
        record.timestamp = truncate_to_millis(record.timestamp);
        staged.push(record);
        sort_newest_first(&mut staged);
        staged.truncate(MAX_STORED_NOTIFICATIONS);
        self.save_dump(&staged)?;
        *dump = staged;
        Ok(())
    }

    fn save_all(&self, records: &[NotificationRecord]) -> Result<()> {
        let mut dump = self.dump.lock().unwrap();
        let mut staged = records.to_vec();
        for record in staged.iter_mut() {
            record.timestamp = truncate_to_millis(record.timestamp);
        }
        sort_newest_first(&mut staged);
        staged.truncate(MAX_STORED_NOTIFICATIONS);
        self.save_dump(&staged)?;
        *dump = staged;
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut dump = self.dump.lock().unwrap();
        let mut staged = dump.clone();
        staged.retain(|r| r.id != id);
        self.save_dump(&staged)?;
        *dump = staged;
        Ok(())
    }

    fn clear_all(&self) -> Result<()> {
        let mut dump = self.dump.lock().unwrap();
        self.save_dump(&[])?;
        dump.clear();
        Ok(())
    }

    fn mark_as_read(&self, id: &str) -> Result<()> {
        let mut dump = self.dump.lock().unwrap();
        let mut staged = dump.clone();
        if let Some(record) = staged.iter_mut().find(|r| r.id == id) {
            record.read = true;
        }
        self.save_dump(&staged)?;
        *dump = staged;
        Ok(())
    }

    fn mark_all_as_read(&self) -> Result<()> {
        let mut dump = self.dump.lock().unwrap();
        let mut staged = dump.clone();
        for record in staged.iter_mut() {
            record.read = true;
        }
        self.save_dump(&staged)?;
        *dump = staged;
        Ok(())
    }
}
