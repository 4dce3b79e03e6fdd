//! Response shapes returned by `trivia` commands.
//!
//! Every field that leaves the process is declared here explicitly. Entities
//! are mapped into views through `From` impls instead of being dumped
//! column-by-column.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::{Category, Question};

/// Public view of a [`Question`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionView {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl From<&Question> for QuestionView {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id,
            question: q.question.clone(),
            answer: q.answer.clone(),
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Map categories to the `{id: label}` object used by every listing response.
#[must_use]
pub fn categories_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|c| (c.id, c.label.clone()))
        .collect()
}

/// Map a slice of questions to views, preserving order.
#[must_use]
pub fn question_views(questions: &[Question]) -> Vec<QuestionView> {
    questions.iter().map(QuestionView::from).collect()
}

/// Response from `trivia categories list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i64, String>,
}

/// Response from `trivia questions list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionsPageResponse {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
    pub current_category: Option<i64>,
    pub categories: BTreeMap<i64, String>,
}

/// Response from `trivia categories questions <id>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
    pub current_category: i64,
}

/// Response from `trivia questions search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
    pub current_category: Option<i64>,
}

/// Response from `trivia questions add`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
}

/// Response from `trivia questions delete`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
}

/// Response from `trivia quiz next`. `question` is `None` once the pool is
/// exhausted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<QuestionView>,
}

/// Response from `trivia db init`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetResponse {
    pub success: bool,
    pub message: String,
    pub categories: usize,
}

/// Error envelope: `{"success": false, "error": 404, "message": "Not Found"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorBody {
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        Self {
            success: false,
            error: status,
            message: status_message(status).to_string(),
        }
    }
}

/// Canonical reason phrase for the status codes this service emits.
#[must_use]
pub const fn status_message(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        422 => "Unprocessable Entity",
        _ => "Internal Server Error",
    }
}
