//! Per-field validation outcome.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::field::FieldId;

/// Message carried by a passing required field.
pub const CHECKMARK: &str = "✓";

/// Fallback for an invalid verdict constructed without a reason.
const UNSPECIFIED: &str = "Invalid value";

/// Latest verdict per field.
pub type Verdicts = BTreeMap<FieldId, Verdict>;

/// Result of validating a single field value.
///
/// An invalid verdict always carries a non-empty message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    valid: bool,
    message: String,
}

impl Verdict {
    /// A passing verdict with the checkmark message.
    pub fn pass() -> Self {
        Self::pass_with(CHECKMARK)
    }

    /// A passing verdict with a custom message.
    pub fn pass_with(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    /// A passing verdict with no message (optional field left empty).
    pub fn blank() -> Self {
        Self::pass_with("")
    }

    /// A failing verdict.
    pub fn fail(message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            message = UNSPECIFIED.to_string();
        }
        Self {
            valid: false,
            message,
        }
    }

    /// Check if the value passed validation.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Check if the value failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.valid
    }

    /// Message to display next to the field.
    pub fn message(&self) -> &str {
        &self.message
    }
}
