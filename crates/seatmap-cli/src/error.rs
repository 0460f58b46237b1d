//! Error types for the seating session.

use thiserror::Error;

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, arranging or exporting.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Seating document could not be parsed
    #[error("Layout document error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Roster could not be read, or export could not be written
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON export failed
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad argument or environment value
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
