//! Account credential rules.
//!
//! User ID and password report every unmet requirement at once, so the user
//! can fix them in a single pass.

use std::sync::LazyLock;

use regex::Regex;

use crate::validation::{Needs, RuleChain, Verdict};

const USER_ID_MIN: usize = 5;
const USER_ID_MAX: usize = 30;
const PASSWORD_MIN: usize = 8;

/// Characters that satisfy the password's special character requirement.
pub const PASSWORD_SPECIALS: &str = "!@#%^&*()-_+=\\/><.,`~";

static USER_ID_CHARSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_\-]+$").expect("Invalid regex pattern"));

/// Values of the fields a password must not contain.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordContext<'a> {
    pub user_id: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
}

impl<'a> PasswordContext<'a> {
    pub fn new(user_id: &'a str, first_name: &'a str, last_name: &'a str) -> Self {
        Self {
            user_id,
            first_name,
            last_name,
        }
    }
}

/// User ID: starts with a letter, 5-30 characters, letters, digits, dashes
/// and underscores only.
pub fn validate_user_id(value: &str) -> Verdict {
    let value = value.trim();
    if value.is_empty() {
        return Verdict::fail("User ID is required");
    }

    let len = value.chars().count();
    let mut needs = Needs::new();
    needs
        .require(
            value.starts_with(|c: char| c.is_ascii_alphabetic()),
            "must start with letter",
        )
        .require(len >= USER_ID_MIN, "at least 5 chars")
        .require(len <= USER_ID_MAX, "max 30 chars")
        .require(
            USER_ID_CHARSET_RE.is_match(value),
            "letters, numbers, dash, underscore only",
        );
    needs.verdict()
}

/// Password strength plus exclusion of the user ID and names.
///
/// Exclusions compare lowercased values; an empty related value excludes
/// nothing.
pub fn validate_password(value: &str, related: &PasswordContext<'_>) -> Verdict {
    if value.is_empty() {
        return Verdict::fail("Password is required");
    }

    let lowered = value.to_lowercase();
    let mut needs = Needs::new();
    needs
        .require(value.chars().any(|c| c.is_ascii_uppercase()), "uppercase")
        .require(value.chars().any(|c| c.is_ascii_lowercase()), "lowercase")
        .require(value.chars().any(|c| c.is_ascii_digit()), "number")
        .require(
            value.chars().any(|c| PASSWORD_SPECIALS.contains(c)),
            "special char",
        )
        .require(value.chars().count() >= PASSWORD_MIN, "8+ chars")
        .require(
            !contains_folded(&lowered, related.user_id),
            "can't contain userId",
        )
        .require(
            !contains_folded(&lowered, related.first_name),
            "can't contain first name",
        )
        .require(
            !contains_folded(&lowered, related.last_name),
            "can't contain last name",
        );
    needs.verdict()
}

/// Confirmation must equal the password exactly.
pub fn validate_confirm_password(value: &str, password: &str) -> Verdict {
    RuleChain::new(value)
        .required("Please confirm password")
        .equals(password, "Passwords do not match")
        .verdict_or("✓ Passwords match")
}

/// Whether `haystack` (already lowercased) contains the trimmed, lowercased
/// `needle`. Blank needles never match.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    !needle.is_empty() && haystack.contains(&needle.to_lowercase())
}
