//! Field validation
//!
//! The only rule is non-empty: a field is invalid iff its raw value has zero
//! length. No trimming — a whitespace-only value counts as filled.

use crate::model::FieldErrors;
use crate::model::FieldName;
use crate::model::FieldValues;

/// Validates a single field value.
///
/// Returns `Some` with the user-facing message when the value is empty,
/// `None` otherwise. Pure, no side effects.
pub fn validate(field: FieldName, value: &str) -> Option<String> {
    if value.is_empty() {
        Some(format!("The {field} is required"))
    } else {
        None
    }
}

/// Validates every field and returns the full error map.
///
/// All three fields are computed, never short-circuited, so every applicable
/// message is produced together. Fields are independent, so the order does
/// not affect the result.
pub fn validate_all(values: &FieldValues) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in FieldName::ALL {
        errors.set(field, validate(field, values.get(field)));
    }
    errors
}
