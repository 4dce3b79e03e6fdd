//! Category repository. Categories are read-only outside of seeding.

use trivia_core::entities::Category;

use crate::error::DatabaseError;
use crate::service::TriviaService;

fn row_to_category(row: &libsql::Row) -> Result<Category, DatabaseError> {
    Ok(Category {
        id: row.get::<i64>(0)?,
        label: row.get::<String>(1)?,
    })
}

impl TriviaService {
    /// All categories, ordered by label.
    pub async fn list_categories(&self) -> Result<Vec<Category>, DatabaseError> {
        let mut rows = self
            .db()
            .query("SELECT id, type FROM categories ORDER BY type, id", ())
            .await?;

        let mut categories = Vec::new();
        while let Some(row) = rows.next().await? {
            categories.push(row_to_category(&row)?);
        }
        Ok(categories)
    }
}
