//! Error types for Shelf core operations.
//!
//! Business-rule refusals (issuing an unavailable book, removing a book that
//! is on loan) are not errors: the catalog reports them as `false`. The
//! variants here cover storage, decoding and integrity problems, which the
//! CLI layer maps to user-facing messages.

use thiserror::Error;

/// Result type alias for Shelf operations.
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Core error type for Shelf operations.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// Storage backend error (read, write, rename)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Snapshot could not be decoded (bad JSON, unknown version)
    #[error("Format error: {0}")]
    Format(String),

    /// Catalog invariants do not hold
    #[error("Integrity error: {0}")]
    Integrity(String),

    /// Record-level validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<std::io::Error> for ShelfError {
    fn from(err: std::io::Error) -> Self {
        ShelfError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ShelfError {
    fn from(err: serde_json::Error) -> Self {
        ShelfError::Format(err.to_string())
    }
}
