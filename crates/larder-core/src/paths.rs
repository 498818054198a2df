//! Well-known filesystem locations

use std::path::PathBuf;

use crate::constants::fs::{
    CATALOG_FILE_NAME, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DATABASE_FILE_NAME,
};

/// Root config directory (`~/.larder`), falling back to the working directory
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Default SQLite database path
pub fn database_path() -> PathBuf {
    config_dir().join(DATABASE_FILE_NAME)
}

/// Default config file path
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Default recipe catalog path
pub fn catalog_file() -> PathBuf {
    config_dir().join(CATALOG_FILE_NAME)
}

/// Log directory
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}
