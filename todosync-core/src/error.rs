//! Error types for Todosync

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Todosync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Todosync operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input file does not exist
    #[error("Todo file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Input file is not valid UTF-8
    #[error("Failed to decode {} as UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
