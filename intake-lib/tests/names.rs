//! Tests for the name rules.

use intake_lib::rules::{validate_first_name, validate_last_name, validate_middle_initial};

#[test]
fn test_first_name_required() {
    let verdict = validate_first_name("   ");
    assert!(verdict.is_invalid());
    assert_eq!(verdict.message(), "First name is required");
}

#[test]
fn test_first_name_accepts_apostrophes_and_dashes() {
    assert!(validate_first_name("Mary-Jo").is_valid());
    assert!(validate_first_name("D'Arcy").is_valid());
    assert!(validate_first_name("  Ada  ").is_valid());
}

#[test]
fn test_first_name_length_checked_before_charset() {
    let verdict = validate_first_name(&"a1".repeat(16));
    assert_eq!(verdict.message(), "Max 30 characters");
    assert!(validate_first_name(&"a".repeat(30)).is_valid());
}

#[test]
fn test_first_name_rejects_digits_and_spaces() {
    assert_eq!(
        validate_first_name("Ada2").message(),
        "Letters, apostrophes, dashes only"
    );
    assert!(validate_first_name("Ada Mae").is_invalid());
}

#[test]
fn test_middle_initial_optional() {
    let verdict = validate_middle_initial("");
    assert!(verdict.is_valid());
    assert_eq!(verdict.message(), "");
    assert!(validate_middle_initial("  ").is_valid());
}

#[test]
fn test_middle_initial_single_letter() {
    assert_eq!(validate_middle_initial("Q").message(), "✓");
    assert_eq!(validate_middle_initial("QR").message(), "One letter only");
    assert_eq!(validate_middle_initial("7").message(), "One letter only");
}

#[test]
fn test_last_name_allows_digits_two_to_five() {
    assert!(validate_last_name("Smith-3").is_valid());
    assert!(validate_last_name("O'Neil").is_valid());
    assert_eq!(
        validate_last_name("Smith1").message(),
        "Letters, dashes, apostrophes, numbers 2-5 only"
    );
    assert!(validate_last_name("Smith6").is_invalid());
}

#[test]
fn test_last_name_required_and_bounded() {
    assert_eq!(validate_last_name("").message(), "Last name is required");
    assert_eq!(
        validate_last_name(&"b".repeat(31)).message(),
        "Max 30 characters"
    );
}
