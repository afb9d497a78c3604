//! SQLite implementation of the StateStore trait.
//!
//! This is the primary state backend. It uses rusqlite with bundled
//! SQLite, wrapped in async via tokio::spawn_blocking.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use rusqlite::{params, Connection, OptionalExtension};

use credledger_core::StateKey;

use crate::error::{Result, StateError};
use crate::migration;
use crate::traits::StateStore;

/// SQLite-based state store.
///
/// Thread-safe via internal Mutex. All operations use spawn_blocking
/// to avoid blocking the async runtime.
pub struct SqliteStore {
    /// The SQLite connection, protected by a mutex.
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        tracing::debug!(version = migration::CURRENT_VERSION, "state schema ready");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

#[async_trait]
impl StateStore for SqliteStore {
    async fn put(&self, key: &StateKey, value: Bytes) -> Result<()> {
        let key = key.clone();
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|e| StateError::Backend(format!("mutex poisoned: {}", e)))?;

            conn.execute(
                "INSERT INTO state_entries (key, value, written_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                     value = excluded.value,
                     written_at = excluded.written_at",
                params![key.as_str(), value.as_ref(), now_millis()],
            )?;

            Ok(())
        })
        .await
        .map_err(|e| StateError::Backend(format!("spawn_blocking failed: {}", e)))?
    }

    async fn get(&self, key: &StateKey) -> Result<Option<Bytes>> {
        let key = key.clone();
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|e| StateError::Backend(format!("mutex poisoned: {}", e)))?;

            let value: Option<Vec<u8>> = conn
                .query_row(
                    "SELECT value FROM state_entries WHERE key = ?1",
                    params![key.as_str()],
                    |row| row.get(0),
                )
                .optional()?;

            Ok(value.map(Bytes::from))
        })
        .await
        .map_err(|e| StateError::Backend(format!("spawn_blocking failed: {}", e)))?
    }
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}
