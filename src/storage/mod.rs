//! Persistent client-side key-value storage
//!
//! A SQLite database holding named string slots, partitioned by API origin.
//! Values survive across invocations and are only removed explicitly.

pub mod origin;

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::StorageError;

pub use origin::origin_key;

/// Schema version - increment to trigger nuke-and-rebuild
const SCHEMA_VERSION: i32 = 1;

/// Database file name inside the data directory
const DB_FILE: &str = "storage.db";

type Result<T> = std::result::Result<T, StorageError>;

/// SQLite-backed key-value storage scoped to one origin
pub struct LocalStorage {
    conn: Mutex<Connection>,
    origin: String,
    path: PathBuf,
}

impl LocalStorage {
    /// Get the default data directory (~/.local/share/recruit on Linux)
    pub fn data_dir() -> Result<PathBuf> {
        let base = dirs::data_local_dir().ok_or(StorageError::NoHome)?;
        Ok(base.join("recruit"))
    }

    /// Open storage for `api_host` in the default or overridden data directory
    pub fn open(data_dir: Option<&str>, api_host: &str) -> Result<Self> {
        let dir = match data_dir {
            Some(dir) => PathBuf::from(dir),
            None => Self::data_dir()?,
        };
        Self::open_at(&dir, &origin_key(api_host))
    }

    /// Open storage at a specific directory with an explicit origin
    pub fn open_at(dir: &Path, origin: &str) -> Result<Self> {
        std::fs::create_dir_all(dir)
            .map_err(|e| StorageError::Io(format!("Failed to create data dir: {}", e)))?;

        let db_path = dir.join(DB_FILE);
        let conn = Connection::open(&db_path)?;

        let version: i32 = conn
            .pragma_query_value(None, "user_version", |r| r.get(0))
            .unwrap_or(0);

        if version != 0 && version != SCHEMA_VERSION {
            log::info!(
                "Storage schema version mismatch ({} != {}), rebuilding",
                version,
                SCHEMA_VERSION
            );
            drop(conn);
            std::fs::remove_file(&db_path)
                .map_err(|e| StorageError::Io(format!("Failed to remove storage DB: {}", e)))?;
            return Self::open_at(dir, origin);
        }

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS entries (
                origin TEXT NOT NULL,
                key TEXT NOT NULL,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL,
                PRIMARY KEY (origin, key)
            );
            "#,
        )?;

        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

        Ok(Self {
            conn: Mutex::new(conn),
            origin: origin.to_string(),
            path: db_path,
        })
    }

    /// Path of the backing database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Origin this storage instance is scoped to
    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Read a slot
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn()
            .query_row(
                "SELECT value FROM entries WHERE origin = ?1 AND key = ?2",
                params![self.origin, key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Write a slot, replacing any previous value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn().execute(
            "INSERT OR REPLACE INTO entries (origin, key, value, updated_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![self.origin, key, value, Utc::now().timestamp()],
        )?;
        Ok(())
    }

    /// Remove a slot; returns whether a value was present
    pub fn remove(&self, key: &str) -> Result<bool> {
        let deleted = self.conn().execute(
            "DELETE FROM entries WHERE origin = ?1 AND key = ?2",
            params![self.origin, key],
        )?;
        Ok(deleted > 0)
    }
}
