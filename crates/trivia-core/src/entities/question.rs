use serde::{Deserialize, Serialize};

/// A trivia question with its answer.
///
/// `category` is a plain category id. Nothing at this layer checks that it
/// refers to an existing [`super::Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}
