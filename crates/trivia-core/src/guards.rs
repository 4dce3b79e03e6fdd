//! Guard helpers.
//!
//! Each guard returns `Ok(())` when its precondition holds and a
//! [`CoreError`] otherwise. They have no other effect.

use serde_json::Value;

use crate::errors::CoreError;

/// Fail with `NotFound` when `items` is empty.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if the slice has zero elements.
pub fn require_nonempty<T>(items: &[T]) -> Result<(), CoreError> {
    if items.is_empty() {
        return Err(CoreError::NotFound("no matching records".into()));
    }
    Ok(())
}

/// Fail with `Unprocessable` when any of `fields` is absent from `payload`.
///
/// Presence is key presence: a field set to `null` counts as present. A
/// payload that is not a JSON object has no fields at all.
///
/// # Errors
///
/// Returns `CoreError::Unprocessable` naming the first missing field.
pub fn require_fields(payload: &Value, fields: &[&str]) -> Result<(), CoreError> {
    let object = payload.as_object();
    for field in fields {
        if !object.is_some_and(|map| map.contains_key(*field)) {
            return Err(CoreError::Unprocessable(format!(
                "missing required field '{field}'"
            )));
        }
    }
    Ok(())
}
