//! Error types for noteboard-core

use thiserror::Error;

/// Result type alias using noteboard-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in noteboard-core operations.
///
/// Board transitions never fail; these only surface while loading settings.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Settings parsed but hold an unusable value
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}
