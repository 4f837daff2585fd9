//! Submission gate.

use log::debug;

use crate::config::ValidationConfig;
use crate::field::FieldId;
use crate::rules::validate_field;
use crate::validation::{Verdict, Verdicts};
use crate::values::FormValues;

/// Run every field's rule against `values`, in evaluation order.
///
/// Invalid verdicts never stop the pass; the returned map always holds one
/// verdict per field.
pub fn evaluate_all(values: &FormValues, config: &ValidationConfig) -> Verdicts {
    FieldId::ALL
        .into_iter()
        .map(|field| (field, validate_field(field, values, config)))
        .collect()
}

/// True iff every field has a valid verdict in `verdicts`.
///
/// Optional fields count too: their rule already accepts an empty value, so a
/// failing optional verdict means the user entered something wrong.
pub fn is_submittable(verdicts: &Verdicts) -> bool {
    FieldId::ALL
        .iter()
        .all(|field| verdicts.get(field).is_some_and(Verdict::is_valid))
}

/// Latest verdict per field and the submit decision derived from them.
///
/// Starts empty, so a fresh gate is not submittable.
#[derive(Debug, Clone, Default)]
pub struct FormGate {
    verdicts: Verdicts,
}

impl FormGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the latest verdict for `field`.
    pub fn record_verdict(&mut self, field: FieldId, verdict: Verdict) {
        self.verdicts.insert(field, verdict);
    }

    /// Latest verdict for `field`, if it has been validated.
    pub fn verdict(&self, field: FieldId) -> Option<&Verdict> {
        self.verdicts.get(&field)
    }

    pub fn verdicts(&self) -> &Verdicts {
        &self.verdicts
    }

    pub fn is_submittable(&self) -> bool {
        is_submittable(&self.verdicts)
    }

    /// Fields that are invalid or have never been validated.
    pub fn invalid_fields(&self) -> Vec<FieldId> {
        FieldId::ALL
            .into_iter()
            .filter(|field| !self.verdict(*field).is_some_and(Verdict::is_valid))
            .collect()
    }

    /// Re-run every rule, replacing all stored verdicts.
    pub fn evaluate_all(&mut self, values: &FormValues, config: &ValidationConfig) -> &Verdicts {
        self.verdicts = evaluate_all(values, config);
        debug!(
            "Evaluated all fields: submittable={}, invalid={:?}",
            self.is_submittable(),
            self.invalid_fields()
        );
        &self.verdicts
    }

    /// Forget every verdict.
    pub fn clear(&mut self) {
        self.verdicts.clear();
    }
}
