//! User preferences storage
//!
//! The SQLite-backed key-value store every persisted setting goes through.
//! Each key is one slot holding one opaque value.

use anyhow::Result;
use rusqlite::params;

use super::{database::Database, slot::KeyValueSlot};

/// User preferences manager
pub struct Preferences {
    db: Database,
}

impl Preferences {
    /// Create preferences manager with existing database
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Get a preference value
    pub fn get(&self, key: &str) -> Option<String> {
        self.db
            .conn()
            .query_row(
                "SELECT value FROM user_preferences WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .ok()
    }

    /// Set a preference value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.db.conn().execute(
            "INSERT INTO user_preferences (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now'))
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = strftime('%s', 'now')",
            params![key, value],
        )?;
        Ok(())
    }
}

impl KeyValueSlot for Preferences {
    fn get(&self, key: &str) -> Option<String> {
        Preferences::get(self, key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Preferences::set(self, key, value)
    }
}
