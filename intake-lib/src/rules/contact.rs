//! Contact and address rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::validation::{RuleChain, Verdict};

/// Address and city length bounds, in characters.
const LINE_MIN: usize = 2;
const LINE_MAX: usize = 30;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").expect("Invalid regex pattern")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("Invalid regex pattern"));

static CITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s\-]+$").expect("Invalid regex pattern"));

static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}$").expect("Invalid regex pattern"));

/// Email, compared case-insensitively.
pub fn validate_email(value: &str) -> Verdict {
    let value = value.trim().to_lowercase();
    RuleChain::new(&value)
        .required("Email is required")
        .pattern(&EMAIL_RE, "Invalid email format (name@domain.com)")
        .verdict()
}

/// Phone: exactly `DDD-DDD-DDDD` after formatting.
pub fn validate_phone(value: &str) -> Verdict {
    RuleChain::new(value)
        .required("Phone is required")
        .pattern(&PHONE_RE, "Format: XXX-XXX-XXXX (10 digits)")
        .verdict()
}

pub fn validate_address1(value: &str) -> Verdict {
    RuleChain::new(value.trim())
        .required("Address is required")
        .min_length(LINE_MIN, "At least 2 characters")
        .max_length(LINE_MAX, "Max 30 characters")
        .verdict()
}

/// Optional second address line.
pub fn validate_address2(value: &str) -> Verdict {
    let value = value.trim();
    if value.is_empty() {
        return Verdict::blank();
    }
    RuleChain::new(value)
        .min_length(LINE_MIN, "At least 2 characters if entered")
        .max_length(LINE_MAX, "Max 30 characters")
        .verdict()
}

pub fn validate_city(value: &str) -> Verdict {
    RuleChain::new(value.trim())
        .required("City is required")
        .min_length(LINE_MIN, "At least 2 characters")
        .max_length(LINE_MAX, "Max 30 characters")
        .pattern(&CITY_RE, "Letters, spaces, dashes only")
        .verdict()
}

/// State: any selection.
pub fn validate_state(value: &str) -> Verdict {
    RuleChain::new(value).required("State is required").verdict()
}

pub fn validate_zip(value: &str) -> Verdict {
    RuleChain::new(value)
        .required("ZIP is required")
        .pattern(&ZIP_RE, "5 digits required")
        .verdict()
}
