//! Persistence layer
//!
//! SQLite-based storage for:
//! - Key-value preference slots (the meal plan lives in one of them)
//! - Schema migrations

mod database;
mod preferences;
mod slot;

pub use database::Database;
pub use preferences::Preferences;
pub use slot::{KeyValueSlot, MemorySlot};
