//! Tests for the form session: cascades, review and submit.

use chrono::NaiveDate;
use intake_lib::{FieldId, IntakeError, IntakeForm, Supplementary, ValidationConfig};

fn config() -> ValidationConfig {
    ValidationConfig::default().with_today(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
}

fn filled_form() -> IntakeForm {
    let mut form = IntakeForm::new(config());
    for (field, raw) in [
        (FieldId::FirstName, "Ada"),
        (FieldId::MiddleInitial, "B"),
        (FieldId::LastName, "Lovelace"),
        (FieldId::Dob, "1990-12-10"),
        (FieldId::PatientId, "123456789"),
        (FieldId::Email, "Ada@Example.com"),
        (FieldId::Phone, "5551234567"),
        (FieldId::Address1, "12 Analytical Way"),
        (FieldId::Address2, "Flat 2"),
        (FieldId::City, "London"),
        (FieldId::State, "NC"),
        (FieldId::Zip, "27514"),
        (FieldId::UserId, "Countess"),
        (FieldId::Password, "Engine#1843"),
        (FieldId::ConfirmPassword, "Engine#1843"),
    ] {
        form.input(field, raw);
    }
    form
}

fn fields(updated: &[(FieldId, intake_lib::Verdict)]) -> Vec<FieldId> {
    updated.iter().map(|(field, _)| *field).collect()
}

#[test]
fn test_input_stores_normalized_value() {
    let mut form = IntakeForm::new(config());
    form.input(FieldId::PatientId, "12345678901");
    form.input(FieldId::Email, " ADA@EXAMPLE.COM ");
    form.input(FieldId::UserId, "Countess");
    assert_eq!(form.value(FieldId::PatientId), "123-45-6789");
    assert_eq!(form.value(FieldId::Email), "ada@example.com");
    assert_eq!(form.value(FieldId::UserId), "countess");
}

#[test]
fn test_input_cascades_to_password_and_confirm() {
    let mut form = IntakeForm::new(config());
    let updated = form.input(FieldId::FirstName, "Ada");
    assert_eq!(
        fields(&updated),
        vec![FieldId::FirstName, FieldId::Password, FieldId::ConfirmPassword]
    );
    assert_eq!(updated[1].1.message(), "Password is required");
    assert_eq!(updated[2].1.message(), "Please confirm password");
    assert_eq!(
        form.verdict(FieldId::Password).map(|v| v.message()),
        Some("Password is required")
    );

    let updated = form.input(FieldId::Email, "ada@example.com");
    assert_eq!(fields(&updated), vec![FieldId::Email]);
}

#[test]
fn test_name_change_invalidates_password() {
    let mut form = filled_form();
    assert!(form.is_submittable());

    form.input(FieldId::FirstName, "Engine");
    let verdict = form.verdict(FieldId::Password).unwrap();
    assert_eq!(verdict.message(), "Need: can't contain first name");
    assert!(!form.is_submittable());
}

#[test]
fn test_password_change_invalidates_confirmation() {
    let mut form = filled_form();
    form.input(FieldId::Password, "Engine#1844");
    assert_eq!(
        form.verdict(FieldId::ConfirmPassword).unwrap().message(),
        "Passwords do not match"
    );
}

#[test]
fn test_fresh_form_not_submittable() {
    let form = IntakeForm::new(config());
    assert!(!form.is_submittable());
    assert!(form.verdicts().is_empty());
}

#[test]
fn test_review_blocked_lists_fields() {
    let mut form = filled_form();
    form.input(FieldId::Zip, "");
    form.input(FieldId::City, "X");

    match form.review() {
        Err(IntakeError::NotSubmittable { fields }) => {
            assert_eq!(fields, vec![FieldId::City, FieldId::Zip]);
        }
        other => panic!("expected NotSubmittable, got {other:?}"),
    }
}

#[test]
fn test_evaluate_all_normalizes_prefilled_values() {
    let values = intake_lib::FormValues::new().with(FieldId::Phone, "555 123 4567");
    let mut form = IntakeForm::with_values(values, config());
    let verdicts = form.evaluate_all();
    assert!(verdicts[&FieldId::Phone].is_valid());
    assert_eq!(form.value(FieldId::Phone), "555-123-4567");
}

#[test]
fn test_review_summary_rows() {
    let mut form = filled_form().with_extras(Supplementary {
        symptoms: "Headache".to_string(),
        history: vec!["Asthma".to_string(), "Diabetes".to_string()],
        gender: Some("Female".to_string()),
        ..Default::default()
    });
    let review = form.review().unwrap();

    assert_eq!(review.get("Name"), Some("Ada B. Lovelace"));
    assert_eq!(review.get("Date of Birth"), Some("12/10/1990"));
    assert_eq!(review.get("Patient ID"), Some("***-**-****"));
    assert_eq!(review.get("Email"), Some("ada@example.com"));
    assert_eq!(
        review.get("Address"),
        Some("12 Analytical Way\nFlat 2\nLondon, NC 27514")
    );
    assert_eq!(review.get("Symptoms"), Some("Headache"));
    assert_eq!(review.get("Medical History"), Some("Asthma, Diabetes"));
    assert_eq!(review.get("Gender"), Some("Female"));
    assert_eq!(review.get("Vaccinated"), Some("Not specified"));
    assert_eq!(review.get("Health Level"), Some("5 / 10"));
    assert_eq!(review.get("User ID"), Some("countess"));
    assert_ne!(review.get("Password"), Some("Engine#1843"));
}

#[test]
fn test_review_display_hides_secrets() {
    let mut form = filled_form();
    let text = form.review().unwrap().to_string();
    assert!(text.contains("Name:"));
    assert!(text.contains("✓ pass"));
    assert!(text.contains("Symptoms:"));
    assert!(!text.contains("123-45-6789"));
    assert!(!text.contains("Engine#1843"));
}

#[test]
fn test_review_defaults_for_empty_extras() {
    let mut form = filled_form();
    form.input(FieldId::MiddleInitial, "");
    form.input(FieldId::Address2, "");
    let review = form.review().unwrap();
    assert_eq!(review.get("Name"), Some("Ada Lovelace"));
    assert_eq!(review.get("Address"), Some("12 Analytical Way\nLondon, NC 27514"));
    assert_eq!(review.get("Symptoms"), Some("None"));
    assert_eq!(review.get("Medical History"), Some("None"));
}

#[test]
fn test_health_level_clamped() {
    assert_eq!(Supplementary::default().with_health_level(0).health_level, 1);
    assert_eq!(Supplementary::default().with_health_level(42).health_level, 10);
}

#[test]
fn test_submit_returns_normalized_values() {
    let mut form = filled_form();
    let submission = form.submit().unwrap();
    assert_eq!(submission.values.get(FieldId::Phone), "555-123-4567");
    assert_eq!(submission.values.get(FieldId::Email), "ada@example.com");
}

#[test]
fn test_submit_blocked_when_invalid() {
    let mut form = IntakeForm::new(config());
    assert!(matches!(
        form.submit(),
        Err(IntakeError::NotSubmittable { .. })
    ));
}

#[test]
fn test_reset_clears_everything() {
    let mut form = filled_form();
    form.reset();
    assert!(form.verdicts().is_empty());
    assert_eq!(form.value(FieldId::FirstName), "");
    assert!(!form.is_submittable());
}
