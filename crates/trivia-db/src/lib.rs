//! # trivia-db
//!
//! libSQL persistence for Trivia: categories and questions.
//!
//! [`TriviaDb`] owns the connection and schema; [`service::TriviaService`]
//! layers the repository methods on top of it (see [`repos`]). Nothing here
//! holds request state: a service is opened when a command starts and dropped
//! when it ends.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;
use libsql::params::IntoParams;

/// Database handle for Trivia state.
pub struct TriviaDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl TriviaDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        tracing::debug!(path, "opening libsql database");
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let trivia_db = Self { db, conn };
        trivia_db.run_migrations().await?;
        Ok(trivia_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Run a statement and return the number of affected rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the statement fails.
    pub async fn execute(
        &self,
        sql: &str,
        params: impl IntoParams,
    ) -> Result<u64, DatabaseError> {
        tracing::debug!(sql, "execute");
        Ok(self.conn.execute(sql, params).await?)
    }

    /// Run a query and return its rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the query fails.
    pub async fn query(
        &self,
        sql: &str,
        params: impl IntoParams,
    ) -> Result<libsql::Rows, DatabaseError> {
        tracing::debug!(sql, "query");
        Ok(self.conn.query(sql, params).await?)
    }

    /// Rowid of the most recent successful `INSERT` on this connection.
    #[must_use]
    pub fn last_insert_rowid(&self) -> i64 {
        self.conn.last_insert_rowid()
    }
}
