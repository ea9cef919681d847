//! Error types for taskboard.

use thiserror::Error;

/// All the ways an API call can fail.
///
/// Missing records are deliberately not represented here: a lookup that
/// finds nothing resolves to `None`, and only infrastructure problems or
/// unparseable input become errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An id argument that is not a valid ObjectId.
    #[error("invalid id: {0}")]
    InvalidId(String),

    /// Any failure reported by the MongoDB driver.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Bad server configuration (environment or CLI flags).
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ApiError>;
