//! Error types for the state backend.

use thiserror::Error;

/// Errors that can occur during state backend operations.
#[derive(Debug, Error)]
pub enum StateError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// The backend itself is unusable (poisoned lock, dead worker).
    #[error("backend failure: {0}")]
    Backend(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for state backend operations.
pub type Result<T> = std::result::Result<T, StateError>;
