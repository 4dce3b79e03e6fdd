//! Service layer hosting the repository methods.
//!
//! `TriviaService` wraps a [`TriviaDb`]. All repo methods are implemented as
//! `impl TriviaService` blocks under [`crate::repos`].

use crate::TriviaDb;
use crate::error::DatabaseError;

pub struct TriviaService {
    db: TriviaDb,
}

impl TriviaService {
    /// Open a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = TriviaDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &TriviaDb {
        &self.db
    }
}
