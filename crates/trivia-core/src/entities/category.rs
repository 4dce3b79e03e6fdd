use serde::{Deserialize, Serialize};

/// A question category. Read-only from the API's point of view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    /// Display label, exposed as `type` on the wire.
    pub label: String,
}
