//! Store error types

use thiserror::Error;

/// Result type alias using `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the record store
///
/// Every operation either returns a well-formed result or one of these two
/// kinds; nothing is retried here, callers decide whether to retry.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or missing required input, raised before anything is written
    #[error("validation error: {0}")]
    Validation(String),

    /// Anything the store backend raises (unreachable, timeout, malformed query)
    #[error(transparent)]
    Store(#[from] mongodb::error::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
