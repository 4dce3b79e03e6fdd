//! Question repository: create, read, search, delete.

use trivia_core::entities::Question;
use trivia_core::payload::NewQuestion;

use crate::error::DatabaseError;
use crate::helpers::escape_like;
use crate::service::TriviaService;

pub(crate) const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

pub(crate) fn row_to_question(row: &libsql::Row) -> Result<Question, DatabaseError> {
    Ok(Question {
        id: row.get::<i64>(0)?,
        question: row.get::<String>(1)?,
        answer: row.get::<String>(2)?,
        category: row.get::<i64>(3)?,
        difficulty: row.get::<i64>(4)?,
    })
}

pub(crate) async fn collect_questions(
    mut rows: libsql::Rows,
) -> Result<Vec<Question>, DatabaseError> {
    let mut questions = Vec::new();
    while let Some(row) = rows.next().await? {
        questions.push(row_to_question(&row)?);
    }
    Ok(questions)
}

impl TriviaService {
    pub async fn create_question(&self, new: &NewQuestion) -> Result<Question, DatabaseError> {
        self.db()
            .execute(
                "INSERT INTO questions (question, answer, category, difficulty)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    new.question.as_str(),
                    new.answer.as_str(),
                    new.category,
                    new.difficulty
                ],
            )
            .await?;
        let id = self.db().last_insert_rowid();
        tracing::info!(id, category = new.category, "question created");

        Ok(Question {
            id,
            question: new.question.clone(),
            answer: new.answer.clone(),
            category: new.category,
            difficulty: new.difficulty,
        })
    }

    pub async fn get_question(&self, id: i64) -> Result<Question, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_question(&row)
    }

    /// Delete a question. Returns `NoResult` when no row has that id.
    pub async fn delete_question(&self, id: i64) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .execute("DELETE FROM questions WHERE id = ?1", [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::info!(id, "question deleted");
        Ok(())
    }

    /// All questions, ordered by id.
    pub async fn list_questions(&self) -> Result<Vec<Question>, DatabaseError> {
        let rows = self
            .db()
            .query(
                &format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"),
                (),
            )
            .await?;
        collect_questions(rows).await
    }

    pub async fn count_questions(&self) -> Result<usize, DatabaseError> {
        let mut rows = self.db().query("SELECT COUNT(*) FROM questions", ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        usize::try_from(row.get::<i64>(0)?)
            .map_err(|e| DatabaseError::Query(format!("negative row count: {e}")))
    }

    /// Questions whose text contains `term`, case-insensitively, ordered by id.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DatabaseError> {
        let rows = self
            .db()
            .query(
                &format!(
                    "SELECT {QUESTION_COLUMNS} FROM questions
                     WHERE question LIKE '%' || ?1 || '%' ESCAPE '\\'
                     ORDER BY id"
                ),
                [escape_like(term)],
            )
            .await?;
        collect_questions(rows).await
    }

    /// Questions in one category, ordered by id.
    pub async fn questions_in_category(
        &self,
        category: i64,
    ) -> Result<Vec<Question>, DatabaseError> {
        let rows = self
            .db()
            .query(
                &format!(
                    "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ?1 ORDER BY id"
                ),
                [category],
            )
            .await?;
        collect_questions(rows).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::error::DatabaseError;
    use crate::test_support::{insert_questions, new_question, test_service};

    #[tokio::test]
    async fn create_then_get() {
        let svc = test_service().await;
        let created = svc
            .create_question(&new_question("Who discovered penicillin?", 1))
            .await
            .unwrap();
        let fetched = svc.get_question(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_missing_question_is_no_result() {
        let svc = test_service().await;
        let err = svc.get_question(42).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NoResult));
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let svc = test_service().await;
        let created = insert_questions(&svc, 2, 1).await;
        svc.delete_question(created[0].id).await.unwrap();
        assert!(matches!(
            svc.get_question(created[0].id).await,
            Err(DatabaseError::NoResult)
        ));
        assert_eq!(svc.count_questions().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn delete_unknown_id_is_no_result() {
        let svc = test_service().await;
        let err = svc.delete_question(-1).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NoResult));
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let svc = test_service().await;
        let created = insert_questions(&svc, 12, 2).await;
        let listed = svc.list_questions().await.unwrap();
        assert_eq!(listed, created);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() {
        let svc = test_service().await;
        svc.create_question(&new_question("What is the largest lake in Africa?", 3))
            .await
            .unwrap();
        svc.create_question(&new_question("Who painted La Gioconda?", 2))
            .await
            .unwrap();

        let hits = svc.search_questions("LAKE").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, 3);
        assert!(svc.search_questions("zzz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_treats_wildcards_literally() {
        let svc = test_service().await;
        svc.create_question(&new_question("Is 100% of the moon visible?", 1))
            .await
            .unwrap();
        svc.create_question(&new_question("Plain question", 1))
            .await
            .unwrap();

        assert_eq!(svc.search_questions("%").await.unwrap().len(), 1);
        assert!(svc.search_questions("_").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn filters_by_category() {
        let svc = test_service().await;
        insert_questions(&svc, 3, 1).await;
        let sports = insert_questions(&svc, 2, 6).await;

        let in_six = svc.questions_in_category(6).await.unwrap();
        assert_eq!(in_six, sports);
        assert!(svc.questions_in_category(5).await.unwrap().is_empty());
    }
}
