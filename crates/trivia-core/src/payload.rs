//! Typed parsing of JSON request payloads.
//!
//! Field presence is checked with [`require_fields`] first; a present field
//! with the wrong shape is also reported as `Unprocessable`.

use std::collections::HashSet;

use serde_json::Value;

use crate::errors::CoreError;
use crate::guards::require_fields;
use crate::quiz::QuizCategory;

/// Fields a new question payload must carry.
pub const NEW_QUESTION_FIELDS: [&str; 4] = ["question", "answer", "category", "difficulty"];

/// Fields a quiz payload must carry.
pub const QUIZ_FIELDS: [&str; 2] = ["quiz_category", "previous_questions"];

/// `quiz_category.type` value the frontend sends for "all categories".
pub const ANY_CATEGORY_TYPE: &str = "click";

/// Input for creating a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl NewQuestion {
    /// Parse and validate a `{question, answer, category, difficulty}` payload.
    ///
    /// `category` and `difficulty` accept either JSON numbers or numeric
    /// strings.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Unprocessable` if a field is missing, has the wrong
    /// type, or a text field is blank.
    pub fn from_payload(payload: &Value) -> Result<Self, CoreError> {
        require_fields(payload, &NEW_QUESTION_FIELDS)?;
        Ok(Self {
            question: text_field(payload, "question")?,
            answer: text_field(payload, "answer")?,
            category: int_field(&payload["category"], "category")?,
            difficulty: int_field(&payload["difficulty"], "difficulty")?,
        })
    }
}

/// Input for drawing the next quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub category: QuizCategory,
    pub previous_questions: HashSet<i64>,
}

impl QuizRequest {
    /// Parse a `{quiz_category: {type, id}, previous_questions: [..]}` payload.
    ///
    /// A `type` of `"click"` or an `id` of `0` selects every category.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Unprocessable` if a field is missing or malformed.
    pub fn from_payload(payload: &Value) -> Result<Self, CoreError> {
        require_fields(payload, &QUIZ_FIELDS)?;

        let quiz_category = &payload["quiz_category"];
        let category = if quiz_category["type"].as_str() == Some(ANY_CATEGORY_TYPE) {
            QuizCategory::Any
        } else {
            let id = quiz_category.get("id").ok_or_else(|| {
                CoreError::Unprocessable("quiz_category is missing 'id'".into())
            })?;
            QuizCategory::from_id(Some(int_field(id, "quiz_category.id")?))
        };

        let previous = payload["previous_questions"].as_array().ok_or_else(|| {
            CoreError::Unprocessable("previous_questions must be an array".into())
        })?;
        let previous_questions = previous
            .iter()
            .map(|v| int_field(v, "previous_questions"))
            .collect::<Result<HashSet<_>, _>>()?;

        Ok(Self {
            category,
            previous_questions,
        })
    }
}

fn text_field(payload: &Value, name: &str) -> Result<String, CoreError> {
    match payload[name].as_str() {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        Some(_) => Err(CoreError::Unprocessable(format!("'{name}' must not be blank"))),
        None => Err(CoreError::Unprocessable(format!("'{name}' must be a string"))),
    }
}

fn int_field(value: &Value, name: &str) -> Result<i64, CoreError> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let s = s.trim();
            s.parse()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
    .ok_or_else(|| CoreError::Unprocessable(format!("'{name}' must be an integer")))
}

/// `3.0` is accepted as `3`; `3.5` and out-of-range values are not.
#[allow(clippy::cast_possible_truncation)]
fn integral(f: f64) -> Option<i64> {
    const LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53
    (f.is_finite() && f.fract() == 0.0 && f.abs() <= LIMIT).then(|| f as i64)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_complete_question() {
        let parsed = NewQuestion::from_payload(&json!({
            "question": "Adding a question",
            "answer": "Question is added!",
            "difficulty": 1,
            "category": "3",
        }))
        .unwrap();
        assert_eq!(
            parsed,
            NewQuestion {
                question: "Adding a question".into(),
                answer: "Question is added!".into(),
                category: 3,
                difficulty: 1,
            }
        );
    }

    #[test]
    fn question_missing_difficulty_is_unprocessable() {
        let err = NewQuestion::from_payload(&json!({
            "question": "q", "answer": "a", "category": 1
        }))
        .unwrap_err();
        assert_eq!(err.status_code(), 422);
        assert!(err.to_string().contains("difficulty"));
    }

    #[test]
    fn question_with_non_numeric_category_is_unprocessable() {
        let err = NewQuestion::from_payload(&json!({
            "question": "q", "answer": "a", "category": "science", "difficulty": 1
        }))
        .unwrap_err();
        assert!(matches!(err, CoreError::Unprocessable(_)));
    }

    #[test]
    fn integral_floats_are_accepted_as_integers() {
        let parsed = NewQuestion::from_payload(&json!({
            "question": "q", "answer": "a", "category": 2.0, "difficulty": "4.0"
        }))
        .unwrap();
        assert_eq!((parsed.category, parsed.difficulty), (2, 4));

        let err = NewQuestion::from_payload(&json!({
            "question": "q", "answer": "a", "category": 2.5, "difficulty": 1
        }))
        .unwrap_err();
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn blank_answer_is_unprocessable() {
        let err = NewQuestion::from_payload(&json!({
            "question": "q", "answer": "  ", "category": 1, "difficulty": 1
        }))
        .unwrap_err();
        assert!(err.to_string().contains("blank"));
    }

    #[test]
    fn quiz_click_type_means_any_category() {
        let req = QuizRequest::from_payload(&json!({
            "quiz_category": {"type": "click", "id": 0},
            "previous_questions": [],
        }))
        .unwrap();
        assert_eq!(req.category, QuizCategory::Any);
        assert!(req.previous_questions.is_empty());
    }

    #[test]
    fn quiz_with_category_and_history() {
        let req = QuizRequest::from_payload(&json!({
            "quiz_category": {"type": "Sports", "id": "6"},
            "previous_questions": [10, 11, "12"],
        }))
        .unwrap();
        assert_eq!(req.category, QuizCategory::Category(6));
        assert_eq!(req.previous_questions, HashSet::from([10, 11, 12]));
    }

    #[test]
    fn quiz_without_previous_questions_is_unprocessable() {
        let err = QuizRequest::from_payload(&json!({"quiz_category": {"id": 1}})).unwrap_err();
        assert_eq!(err.status_code(), 422);
    }

    #[test]
    fn quiz_with_scalar_history_is_unprocessable() {
        let err = QuizRequest::from_payload(&json!({
            "quiz_category": {"id": 1},
            "previous_questions": 5,
        }))
        .unwrap_err();
        assert!(err.to_string().contains("array"));
    }
}
