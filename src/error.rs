//! Error types for the fallible edges (config, terminal I/O, JSON output).
//!
//! The engine itself is total and never returns these.

use thiserror::Error;

/// Crate error type
#[derive(Error, Debug)]
pub enum LimnusError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, LimnusError>;
