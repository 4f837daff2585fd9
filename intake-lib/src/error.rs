//! Error types
//!
//! Validation failures are never errors: they are reported as
//! [`Verdict`](crate::Verdict) data. These variants cover the edges around the
//! rule engine.

use crate::field::FieldId;

/// Errors raised by the intake core.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// A field name did not match any known field.
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    /// Review or submit was attempted while at least one field is invalid.
    #[error("Form is not submittable; invalid fields: {}", join_fields(.fields))]
    NotSubmittable {
        /// Fields blocking submission, in evaluation order.
        fields: Vec<FieldId>,
    },

    /// A form document could not be parsed.
    #[error("Invalid form document: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntakeError {
    /// Creates a new not-submittable error.
    pub fn not_submittable(fields: Vec<FieldId>) -> Self {
        Self::NotSubmittable { fields }
    }
}

fn join_fields(fields: &[FieldId]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
