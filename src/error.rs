//! Error types for sevapass.

use thiserror::Error;

/// Common error type for sevapass.
#[derive(Error, Debug)]
pub enum SevapassError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Server error.
    #[error("server error: {0}")]
    Server(String),
}

/// Result type alias for sevapass operations.
pub type Result<T> = std::result::Result<T, SevapassError>;
