//! Subcommand bodies.
//!
//! Each command returns an [`Outcome`] instead of printing, so `main` owns the
//! terminal and the exit status.

use std::fmt::Write;

use intake_lib::{
    FieldId, FormValues, IntakeError, IntakeForm, ValidationConfig, is_submittable, validate_field,
};

use crate::document::IntakeDocument;
use crate::output::{self, Format};

/// What a command wants printed, and whether it succeeded.
#[derive(Debug, Default)]
pub struct Outcome {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

/// Every verdict plus the gate decision. Succeeds only when submittable.
pub fn check(
    document: IntakeDocument,
    config: ValidationConfig,
    format: Format,
) -> anyhow::Result<Outcome> {
    let mut form = IntakeForm::with_values(document.fields, config);
    let verdicts = form.evaluate_all();
    Ok(Outcome {
        stdout: output::render_verdicts(verdicts, format)?,
        stderr: String::new(),
        success: is_submittable(verdicts),
    })
}

/// The review summary, or the fields blocking it.
pub fn review(
    document: IntakeDocument,
    config: ValidationConfig,
    format: Format,
) -> anyhow::Result<Outcome> {
    let mut form = IntakeForm::with_values(document.fields, config).with_extras(document.extras);
    match form.review() {
        Ok(summary) => {
            let stdout = match format {
                Format::Text => summary.to_string(),
                Format::Json => serde_json::to_string_pretty(&summary)? + "\n",
            };
            Ok(Outcome {
                stdout,
                stderr: String::new(),
                success: true,
            })
        }
        Err(IntakeError::NotSubmittable { fields }) => {
            log::info!("Review blocked by {} field(s)", fields.len());
            let mut stderr = String::from("Please correct all errors before reviewing the form:\n");
            for field in fields {
                let message = form.verdict(field).map(|v| v.message()).unwrap_or_default();
                writeln!(stderr, "  {}: {}", field.label(), message)?;
            }
            Ok(Outcome {
                stdout: String::new(),
                stderr,
                success: false,
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// Normalize and validate one value on its own.
pub fn field(
    field: FieldId,
    value: &str,
    config: &ValidationConfig,
    format: Format,
) -> anyhow::Result<Outcome> {
    let normalized = field.normalize(value);
    if normalized != value {
        log::debug!("{} normalized {:?} to {:?}", field, value, normalized);
    }
    let values = FormValues::new().with(field, value);
    let verdict = validate_field(field, &values, config);
    let mut stdout = output::render_verdict(field, &normalized, &verdict, format)?;
    stdout.push('\n');
    Ok(Outcome {
        stdout,
        stderr: String::new(),
        success: verdict.is_valid(),
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use chrono::NaiveDate;

    use super::*;

    const COMPLETE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/complete.json");

    fn config() -> ValidationConfig {
        ValidationConfig::default().with_today(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    fn complete() -> IntakeDocument {
        IntakeDocument::load(Path::new(COMPLETE)).unwrap()
    }

    fn incomplete() -> IntakeDocument {
        IntakeDocument::parse(r#"{"fields": {"firstName": "Ada", "zip": "12"}}"#).unwrap()
    }

    #[test]
    fn test_check_complete_document_succeeds() {
        let outcome = check(complete(), config(), Format::Text).unwrap();
        assert!(outcome.success);
        assert!(outcome.stdout.trim_end().ends_with("Form is submittable"));
        assert!(!outcome.stdout.contains('✗'));
    }

    #[test]
    fn test_check_incomplete_document_fails() {
        let outcome = check(incomplete(), config(), Format::Text).unwrap();
        assert!(!outcome.success);
        assert!(outcome.stdout.contains("✗ 5 digits required"));
        assert!(outcome.stdout.trim_end().ends_with("Form is not submittable"));
    }

    #[test]
    fn test_check_json_reports_gate() {
        let outcome = check(incomplete(), config(), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&outcome.stdout).unwrap();
        assert_eq!(value["submittable"], false);
        assert_eq!(value["verdicts"]["firstName"]["valid"], true);
    }

    #[test]
    fn test_review_complete_document() {
        let outcome = review(complete(), config(), Format::Text).unwrap();
        assert!(outcome.success);
        assert!(outcome.stderr.is_empty());
        assert!(outcome.stdout.contains("Ada B. Lovelace"));
        assert!(outcome.stdout.contains("Asthma"));
        assert!(!outcome.stdout.contains("Engine#1843"));
    }

    #[test]
    fn test_review_incomplete_document_lists_blockers() {
        let outcome = review(incomplete(), config(), Format::Text).unwrap();
        assert!(!outcome.success);
        assert!(outcome.stdout.is_empty());
        assert!(
            outcome
                .stderr
                .starts_with("Please correct all errors before reviewing the form:")
        );
        assert!(outcome.stderr.contains("  ZIP: 5 digits required"));
        assert!(outcome.stderr.contains("  Last Name: Last name is required"));
        assert!(!outcome.stderr.contains("First Name"));
    }

    #[test]
    fn test_review_json() {
        let outcome = review(complete(), config(), Format::Json).unwrap();
        assert!(outcome.success);
        let _: serde_json::Value = serde_json::from_str(&outcome.stdout).unwrap();
    }

    #[test]
    fn test_field_valid_value() {
        let outcome = field(FieldId::Phone, "(555) 123 4567", &config(), Format::Text).unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.stdout, "phone = \"555-123-4567\"  ✓\n");
    }

    #[test]
    fn test_field_invalid_value() {
        let outcome = field(FieldId::Zip, "12", &config(), Format::Text).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.stdout, "zip = \"12\"  ✗ 5 digits required\n");
    }
}
