//! Larder error types

use thiserror::Error;

/// Domain errors surfaced by the core library
///
/// Plan persistence and the companion link never return these to callers;
/// they degrade silently and log instead.
#[derive(Debug, Error)]
pub enum LarderError {
    /// Config file could not be parsed
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// Recipe catalog could not be parsed
    #[error("invalid recipe catalog: {0}")]
    Catalog(String),

    /// Date string was not `YYYY-MM-DD`
    #[error("invalid day: {0}")]
    InvalidDay(String),

    /// Transport refused a companion message
    #[error("companion link error: {0}")]
    Link(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for core operations
pub type LarderResult<T> = Result<T, LarderError>;
