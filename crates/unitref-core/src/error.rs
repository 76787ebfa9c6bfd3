// Rust guideline compliant 2026-02-06

//! Error types for the unitref core library.

use thiserror::Error;

/// Result type alias for unitref operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for unitref operations.
///
/// Resolution itself never fails: an empty or multi-element result is an
/// ordinary outcome. These variants cover loading candidate lists and
/// configuration, and callers that demand a unique resolution.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value or file.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No candidate matched the query.
    #[error("No matches for {0}")]
    NoMatch(String),

    /// The query matched more than one candidate.
    #[error("Search for {0} matched more than one candidate: {1:?}")]
    Ambiguous(String, Vec<String>),
}
