//! Quiz question selection.
//!
//! The selector is stateless: every call receives the set of ids the player
//! has already seen, and it is up to the caller to grow that set between
//! calls.

use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::entities::Question;

/// Category filter for a quiz round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizCategory {
    /// Draw from every category.
    Any,
    /// Draw only from the given category id.
    Category(i64),
}

impl QuizCategory {
    /// Build a filter from an optional category id. `None` and `0` both mean
    /// "any category".
    #[must_use]
    pub const fn from_id(id: Option<i64>) -> Self {
        match id {
            None | Some(0) => Self::Any,
            Some(id) => Self::Category(id),
        }
    }

    /// Category id to filter on, or `None` for [`QuizCategory::Any`].
    #[must_use]
    pub const fn category_id(self) -> Option<i64> {
        match self {
            Self::Any => None,
            Self::Category(id) => Some(id),
        }
    }

    #[must_use]
    pub const fn matches(self, category: i64) -> bool {
        match self {
            Self::Any => true,
            Self::Category(id) => id == category,
        }
    }
}

impl fmt::Display for QuizCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Category(id) => write!(f, "{id}"),
        }
    }
}

/// Questions that match `category` and are not in `excluded`, in input order.
#[must_use]
pub fn candidate_pool<'a>(
    questions: &'a [Question],
    category: QuizCategory,
    excluded: &HashSet<i64>,
) -> Vec<&'a Question> {
    questions
        .iter()
        .filter(|q| category.matches(q.category) && !excluded.contains(&q.id))
        .collect()
}

/// Pick one unseen question uniformly at random.
///
/// Returns `None` when every matching question has been excluded, which is
/// the normal end of a quiz.
pub fn pick_next<'a, R: Rng + ?Sized>(
    questions: &'a [Question],
    category: QuizCategory,
    excluded: &HashSet<i64>,
    rng: &mut R,
) -> Option<&'a Question> {
    candidate_pool(questions, category, excluded)
        .choose(rng)
        .copied()
}
