//! Key-value persistence slots
//!
//! Everything persisted by Larder is a whole value written to a single key.
//! There are no partial writes: `set` replaces the previous value entirely.

use anyhow::Result;
use parking_lot::Mutex;
use std::collections::HashMap;

/// A key-value store addressed by fixed slot keys
pub trait KeyValueSlot {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueSlot + ?Sized> KeyValueSlot for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// In-memory slot store for ephemeral sessions and tests
#[derive(Debug, Default)]
pub struct MemorySlot {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueSlot for MemorySlot {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
