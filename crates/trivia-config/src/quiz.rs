//! Listing and quiz settings.

use serde::{Deserialize, Serialize};

/// Default number of questions per listing page.
const fn default_page_size() -> usize {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuizConfig {
    /// Questions per page for `questions list`.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}
