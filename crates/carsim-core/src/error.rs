//! Error types for configuration and drive-script files

use thiserror::Error;

/// Errors that can occur while loading or saving JSON files
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File content is not valid JSON for the expected type
    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
