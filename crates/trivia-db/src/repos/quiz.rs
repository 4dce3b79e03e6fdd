//! Quiz pool queries.

use std::collections::HashSet;

use rand::Rng;
use trivia_core::entities::Question;
use trivia_core::payload::QuizRequest;
use trivia_core::quiz::{QuizCategory, pick_next};

use super::question::{QUESTION_COLUMNS, collect_questions};
use crate::error::DatabaseError;
use crate::helpers::json_id_array;
use crate::service::TriviaService;

impl TriviaService {
    /// Questions matching `category` whose ids are not in `excluded`, ordered
    /// by id.
    ///
    /// The exclusion set is bound as one JSON array parameter, so its size is
    /// not limited by SQLite's bound-variable cap.
    pub async fn quiz_pool(
        &self,
        category: QuizCategory,
        excluded: &HashSet<i64>,
    ) -> Result<Vec<Question>, DatabaseError> {
        let mut clauses = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(id) = category.category_id() {
            params.push(id.into());
            clauses.push(format!("category = ?{}", params.len()));
        }
        if !excluded.is_empty() {
            params.push(json_id_array(excluded).into());
            clauses.push(format!(
                "id NOT IN (SELECT value FROM json_each(?{}))",
                params.len()
            ));
        }

        let filter = if clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", clauses.join(" AND "))
        };
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions {filter} ORDER BY id");

        let rows = self
            .db()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        collect_questions(rows).await
    }

    /// Draw the next quiz question, or `None` once the pool is exhausted.
    pub async fn next_quiz_question<R: Rng + ?Sized>(
        &self,
        request: &QuizRequest,
        rng: &mut R,
    ) -> Result<Option<Question>, DatabaseError> {
        let pool = self
            .quiz_pool(request.category, &request.previous_questions)
            .await?;
        tracing::debug!(
            category = %request.category,
            seen = request.previous_questions.len(),
            pool = pool.len(),
            "quiz pool"
        );
        Ok(pick_next(&pool, request.category, &request.previous_questions, rng).cloned())
    }
}
