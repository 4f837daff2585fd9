//! Name, date of birth and patient ID rules.

use std::sync::LazyLock;

use chrono::{Months, NaiveDate};
use regex::Regex;

use crate::validation::{RuleChain, Verdict};

/// Longest accepted name, in characters.
const NAME_MAX: usize = 30;

/// Accepted date input formats, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

static FIRST_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\-']+$").expect("Invalid regex pattern"));

static LAST_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\-'2-5]+$").expect("Invalid regex pattern"));

static INITIAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]$").expect("Invalid regex pattern"));

static PATIENT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}-[0-9]{2}-[0-9]{4}$").expect("Invalid regex pattern"));

/// First name: 1-30 letters, apostrophes or dashes.
pub fn validate_first_name(value: &str) -> Verdict {
    RuleChain::new(value.trim())
        .required("First name is required")
        .max_length(NAME_MAX, "Max 30 characters")
        .pattern(&FIRST_NAME_RE, "Letters, apostrophes, dashes only")
        .verdict()
}

/// Optional middle initial: a single letter when present.
pub fn validate_middle_initial(value: &str) -> Verdict {
    let value = value.trim();
    if value.is_empty() {
        return Verdict::blank();
    }
    RuleChain::new(value)
        .pattern(&INITIAL_RE, "One letter only")
        .verdict()
}

/// Last name: like the first name, but digits 2-5 are allowed (suffixes such
/// as "Smith-3").
pub fn validate_last_name(value: &str) -> Verdict {
    RuleChain::new(value.trim())
        .required("Last name is required")
        .max_length(NAME_MAX, "Max 30 characters")
        .pattern(&LAST_NAME_RE, "Letters, dashes, apostrophes, numbers 2-5 only")
        .verdict()
}

/// Date of birth: not in the future and no more than `max_age_years` before
/// `today`, with month and day preserved.
pub fn validate_dob(value: &str, today: NaiveDate, max_age_years: u32) -> Verdict {
    if value.is_empty() {
        return Verdict::fail("Date of birth is required");
    }
    let Some(dob) = parse_date(value) else {
        return Verdict::fail("Enter a valid date (YYYY-MM-DD)");
    };

    if dob > today {
        Verdict::fail("Date cannot be in the future")
    } else if dob < earliest_dob(today, max_age_years) {
        Verdict::fail(format!(
            "Date cannot be more than {} years ago",
            max_age_years
        ))
    } else {
        Verdict::pass()
    }
}

/// Patient ID: exactly `DDD-DD-DDDD` after formatting.
pub fn validate_patient_id(value: &str) -> Verdict {
    RuleChain::new(value)
        .required("Patient ID is required")
        .pattern(&PATIENT_ID_RE, "Format: XXX-XX-XXXX (9 digits)")
        .verdict()
}

/// Parse a date in any accepted input format.
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Oldest accepted date of birth.
///
/// Feb 29 clamps to Feb 28 when the target year is not a leap year.
fn earliest_dob(today: NaiveDate, max_age_years: u32) -> NaiveDate {
    today
        .checked_sub_months(Months::new(max_age_years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("1990-04-12"), Some(date(1990, 4, 12)));
        assert_eq!(parse_date("04/12/1990"), Some(date(1990, 4, 12)));
        assert_eq!(parse_date(" 1990-04-12 "), Some(date(1990, 4, 12)));
        assert_eq!(parse_date("1990-13-01"), None);
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn test_earliest_dob_preserves_month_and_day() {
        assert_eq!(earliest_dob(date(2026, 10, 19), 120), date(1906, 10, 19));
    }

    #[test]
    fn test_earliest_dob_leap_day_clamps() {
        assert_eq!(earliest_dob(date(2024, 2, 29), 1), date(2023, 2, 28));
    }
}
