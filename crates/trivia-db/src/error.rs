//! Database error types for trivia-db.

use thiserror::Error;
use trivia_core::errors::CoreError;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned data that could not be parsed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A missing row is `NotFound`; every other storage failure is reported as
/// `Unprocessable`.
impl From<DatabaseError> for CoreError {
    fn from(e: DatabaseError) -> Self {
        match e {
            DatabaseError::NoResult => Self::NotFound("no matching record".into()),
            other => Self::Unprocessable(other.to_string()),
        }
    }
}
