//! Error types for nova-timestamp
//!
//! Only the ambient surfaces (config files, clipboard, CLI arguments) can
//! fail. Query interpretation never does: unparseable input yields no results.

use thiserror::Error;

/// Errors that can occur outside of query interpretation
#[derive(Debug, Error)]
pub enum TimestampError {
    /// Clipboard operation errors
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Invalid command-line usage
    #[error("{0}")]
    Cli(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("Config serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for nova-timestamp operations
pub type TimestampResult<T> = Result<T, TimestampError>;
