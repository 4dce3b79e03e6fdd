//! Database reset and seed data.

use trivia_core::payload::NewQuestion;

use crate::error::DatabaseError;
use crate::service::TriviaService;

/// Default categories as `(id, label)`.
pub const DEFAULT_CATEGORIES: [(i64, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// Starter questions as `(question, answer, category, difficulty)`.
pub const SAMPLE_QUESTIONS: [(&str, &str, i64, i64); 10] = [
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    (
        "Hematology is a branch of medicine involving the study of what?",
        "Blood",
        1,
        4,
    ),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    (
        "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
        "Maya Angelou",
        4,
        2,
    ),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    (
        "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
        "Apollo 13",
        5,
        4,
    ),
    (
        "Which is the only team to play in every soccer World Cup tournament?",
        "Brazil",
        6,
        3,
    ),
    (
        "Which country won the first ever soccer World Cup in 1930?",
        "Uruguay",
        6,
        4,
    ),
];

impl TriviaService {
    /// Delete every category and question and restart question ids at 1.
    pub async fn reset(&self) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute_batch(
                "DELETE FROM questions;
                 DELETE FROM categories;
                 DELETE FROM sqlite_sequence WHERE name = 'questions';",
            )
            .await
            .map_err(|e| DatabaseError::Query(format!("reset: {e}")))?;
        tracing::info!("database reset");
        Ok(())
    }

    /// Insert [`DEFAULT_CATEGORIES`]. Returns the number inserted.
    pub async fn seed_categories(&self) -> Result<usize, DatabaseError> {
        for (id, label) in DEFAULT_CATEGORIES {
            self.db()
                .execute(
                    "INSERT INTO categories (id, type) VALUES (?1, ?2)",
                    libsql::params![id, label],
                )
                .await?;
        }
        Ok(DEFAULT_CATEGORIES.len())
    }

    /// Insert [`SAMPLE_QUESTIONS`]. Returns the number inserted.
    pub async fn seed_questions(&self) -> Result<usize, DatabaseError> {
        for (question, answer, category, difficulty) in SAMPLE_QUESTIONS {
            self.create_question(&NewQuestion {
                question: question.to_string(),
                answer: answer.to_string(),
                category,
                difficulty,
            })
            .await?;
        }
        Ok(SAMPLE_QUESTIONS.len())
    }

    /// Drop all rows and load the default categories and sample questions.
    ///
    /// Runs in one transaction: on failure the previous contents are kept.
    /// Returns the number of categories seeded.
    pub async fn reset_and_seed(&self) -> Result<usize, DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        match self.replace_contents().await {
            Ok((categories, questions)) => {
                tx.commit().await?;
                tracing::info!(categories, questions, "database seeded");
                Ok(categories)
            }
            Err(e) => {
                tracing::warn!(error = %e, "seeding failed, rolling back");
                tx.rollback().await?;
                Err(e)
            }
        }
    }

    async fn replace_contents(&self) -> Result<(usize, usize), DatabaseError> {
        self.reset().await?;
        let categories = self.seed_categories().await?;
        let questions = self.seed_questions().await?;
        Ok((categories, questions))
    }
}
