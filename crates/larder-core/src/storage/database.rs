//! SQLite database wrapper
//!
//! The schema version lives in SQLite's `user_version` header field, so an
//! existing database is upgraded in place when the binary is newer.

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;
use tracing::{debug, info};

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// SQLite database wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database at `path` and bring its schema up to date
    pub fn new(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.busy_timeout(std::time::Duration::from_secs(5))?;

        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub(crate) fn schema_version(&self) -> Result<i32> {
        let version = self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))?;
        Ok(version)
    }

    pub(crate) fn migrate(&self) -> Result<()> {
        let version = self.schema_version()?;
        if version >= SCHEMA_VERSION {
            debug!("Database schema at version {}", version);
            return Ok(());
        }

        info!("Upgrading database schema {} -> {}", version, SCHEMA_VERSION);
        let tx = self.conn.unchecked_transaction()?;
        if version < 1 {
            // One row per persistence slot; values are opaque JSON text
            tx.execute_batch(
                "CREATE TABLE IF NOT EXISTS user_preferences (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL,
                    updated_at INTEGER NOT NULL
                );",
            )?;
        }
        tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        tx.commit()?;
        Ok(())
    }
}
