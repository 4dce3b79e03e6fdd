//! Shared test utilities for trivia-db.

use trivia_core::entities::Question;
use trivia_core::payload::NewQuestion;

use crate::service::TriviaService;

/// In-memory service with an empty schema.
pub async fn test_service() -> TriviaService {
    TriviaService::new_local(":memory:").await.unwrap()
}

/// In-memory service with the default categories and no questions.
pub async fn seeded_service() -> TriviaService {
    let svc = test_service().await;
    svc.reset().await.unwrap();
    svc.seed_categories().await.unwrap();
    svc
}

pub fn new_question(question: &str, category: i64) -> NewQuestion {
    NewQuestion {
        question: question.to_string(),
        answer: format!("answer to {question}"),
        category,
        difficulty: 1,
    }
}

/// Insert `count` questions named `Q1..Qn` into `category`.
pub async fn insert_questions(svc: &TriviaService, count: usize, category: i64) -> Vec<Question> {
    let mut created = Vec::with_capacity(count);
    for n in 1..=count {
        created.push(
            svc.create_question(&new_question(&format!("Q{n}"), category))
                .await
                .unwrap(),
        );
    }
    created
}
