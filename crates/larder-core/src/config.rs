//! User configuration (`~/.larder/config.toml`)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::plan::DEFAULT_UPCOMING_DAYS;
use crate::error::LarderResult;
use crate::paths;

/// Larder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LarderConfig {
    /// How many days the planner lists, starting today
    pub upcoming_days: u32,
    /// Override for the SQLite database location
    pub database_path: Option<PathBuf>,
    /// Override for the recipe catalog location
    pub catalog_path: Option<PathBuf>,
}

impl Default for LarderConfig {
    fn default() -> Self {
        Self {
            upcoming_days: DEFAULT_UPCOMING_DAYS,
            database_path: None,
            catalog_path: None,
        }
    }
}

impl LarderConfig {
    /// Load from the default config file
    pub fn load() -> LarderResult<Self> {
        Self::load_from_path(&paths::config_file())
    }

    /// Load from a specific path; a missing file yields defaults
    pub fn load_from_path(path: &Path) -> LarderResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: LarderConfig = toml::from_str(&contents)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Resolved database path
    pub fn database_path(&self) -> PathBuf {
        self.database_path
            .clone()
            .unwrap_or_else(paths::database_path)
    }

    /// Resolved recipe catalog path
    pub fn catalog_path(&self) -> PathBuf {
        self.catalog_path.clone().unwrap_or_else(paths::catalog_file)
    }
}
