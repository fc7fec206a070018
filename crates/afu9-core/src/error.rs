// Rust guideline compliant 2026-10-16

//! Error types for the AFU-9 core library.
//!
//! The resolver itself never fails; these errors cover parsing, snapshot
//! loading, configuration and explicit transition checks.

use thiserror::Error;

/// Result type alias for AFU-9 operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for AFU-9 operations.
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
    Config(String),

    /// A status string did not match any known status or alias.
    #[error("Unknown issue status: {0}")]
    UnknownStatus(String),

    /// Invalid state transition.
    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),

    /// The same record ID appeared twice in a snapshot.
    #[error("Duplicate {kind} ID in snapshot: {id}")]
    DuplicateId {
        /// Record kind ("issue" or "draft").
        kind: &'static str,
        /// The repeated identifier.
        id: String,
    },
}
