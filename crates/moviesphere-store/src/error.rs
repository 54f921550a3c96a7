//! Error types for the persistence store.

use thiserror::Error;

/// Errors that can occur in store operations.
///
/// A corrupt *stored* record never surfaces here — reads treat it as
/// absent. [`Error::Parse`] is raised only when caller-supplied input
/// (an imported backup document) cannot be parsed.
#[derive(Debug, Error)]
pub enum Error {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Caller-supplied JSON could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
