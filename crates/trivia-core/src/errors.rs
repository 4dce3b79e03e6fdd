//! Cross-cutting error types for Trivia.
//!
//! The request core only ever signals two kinds of failure: something that
//! should exist does not (`NotFound`), or the input cannot be processed
//! (`Unprocessable`). Domain-specific errors (`DatabaseError`, `AuthError`,
//! `ConfigError`) live in their own crates and converge in `trivia-cli`.

use thiserror::Error;

use crate::responses::ErrorBody;

/// Errors raised by the request core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested or filtered collection is empty, or an entity is missing.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A required field is missing or malformed, or a write was rejected.
    #[error("Unprocessable entity: {0}")]
    Unprocessable(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// HTTP-style status code for this error kind.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Unprocessable(_) => 422,
            Self::Other(_) => 500,
        }
    }

    /// Render as the `{success, error, message}` error envelope.
    #[must_use]
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody::from_status(self.status_code())
    }
}
