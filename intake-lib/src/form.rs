//! Form session driven by the UI layer.

use std::collections::{BTreeSet, VecDeque};

use log::debug;
use serde::Serialize;

use crate::config::ValidationConfig;
use crate::error::IntakeError;
use crate::field::FieldId;
use crate::gate::FormGate;
use crate::review::{ReviewSummary, Supplementary};
use crate::rules::validate_field;
use crate::validation::{Verdict, Verdicts};
use crate::values::FormValues;

/// A gated, submittable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub values: FormValues,
    pub extras: Supplementary,
}

/// One form session: stored values, their verdicts and the gate.
///
/// # Example
///
/// ```
/// use intake_lib::{FieldId, IntakeForm, ValidationConfig};
///
/// let mut form = IntakeForm::new(ValidationConfig::default());
/// let updated = form.input(FieldId::Phone, "(555) 123 4567");
///
/// assert_eq!(form.value(FieldId::Phone), "555-123-4567");
/// assert!(updated[0].1.is_valid());
/// assert!(!form.is_submittable());
/// ```
#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    values: FormValues,
    gate: FormGate,
    config: ValidationConfig,
    extras: Supplementary,
}

impl IntakeForm {
    /// Empty form.
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Form pre-filled with `values`. Nothing is validated yet.
    pub fn with_values(values: FormValues, config: ValidationConfig) -> Self {
        Self {
            values,
            config,
            ..Default::default()
        }
    }

    /// Attach the non-validated inputs.
    pub fn with_extras(mut self, extras: Supplementary) -> Self {
        self.extras = extras;
        self
    }

    /// Store a user edit and re-validate the field and everything that reads it.
    ///
    /// Returns each recomputed verdict in the order it was computed: the
    /// edited field first, then its dependents.
    pub fn input(&mut self, field: FieldId, raw: &str) -> Vec<(FieldId, Verdict)> {
        self.values.set(field, field.normalize(raw));

        let mut updated = Vec::new();
        let mut seen = BTreeSet::new();
        let mut queue = VecDeque::from([field]);
        while let Some(next) = queue.pop_front() {
            if !seen.insert(next) {
                continue;
            }
            let verdict = validate_field(next, &self.values, &self.config);
            self.gate.record_verdict(next, verdict.clone());
            updated.push((next, verdict));
            queue.extend(next.dependents());
        }

        if updated.len() > 1 {
            debug!(
                "Input on {} re-validated {:?}",
                field,
                updated.iter().map(|(f, _)| *f).collect::<Vec<_>>()
            );
        }
        updated
    }

    /// Stored value of `field`.
    pub fn value(&self, field: FieldId) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Latest verdict for `field`, if validated.
    pub fn verdict(&self, field: FieldId) -> Option<&Verdict> {
        self.gate.verdict(field)
    }

    pub fn verdicts(&self) -> &Verdicts {
        self.gate.verdicts()
    }

    pub fn is_submittable(&self) -> bool {
        self.gate.is_submittable()
    }

    /// Normalize every stored value and re-run all rules.
    ///
    /// Clears any verdict left stale by a dependency the user changed after
    /// last touching a field.
    pub fn evaluate_all(&mut self) -> &Verdicts {
        for field in FieldId::ALL {
            let normalized = field.normalize(self.values.get(field));
            self.values.set(field, normalized);
        }
        self.gate.evaluate_all(&self.values, &self.config)
    }

    /// Evaluate everything and build the review summary.
    ///
    /// # Errors
    ///
    /// [`IntakeError::NotSubmittable`] listing the blocking fields.
    pub fn review(&mut self) -> Result<ReviewSummary, IntakeError> {
        self.ensure_submittable()?;
        Ok(ReviewSummary::build(&self.values, &self.extras))
    }

    /// Evaluate everything and hand back the final values.
    ///
    /// # Errors
    ///
    /// [`IntakeError::NotSubmittable`] listing the blocking fields.
    pub fn submit(&mut self) -> Result<Submission, IntakeError> {
        self.ensure_submittable()?;
        debug!("Form submitted");
        Ok(Submission {
            values: self.values.clone(),
            extras: self.extras.clone(),
        })
    }

    /// Clear all values, verdicts and extras, keeping the config.
    pub fn reset(&mut self) {
        self.values = FormValues::new();
        self.gate.clear();
        self.extras = Supplementary::default();
    }

    fn ensure_submittable(&mut self) -> Result<(), IntakeError> {
        self.evaluate_all();
        if self.gate.is_submittable() {
            Ok(())
        } else {
            Err(IntakeError::not_submittable(self.gate.invalid_fields()))
        }
    }
}
