//! As-you-type formatters for digit fields.

/// Patient ID digit groups: `DDD-DD-DDDD`.
const PATIENT_ID_GROUPS: &[usize] = &[3, 2, 4];

/// Phone digit groups: `DDD-DDD-DDDD`.
const PHONE_GROUPS: &[usize] = &[3, 3, 4];

/// ZIP is a single group of five.
const ZIP_GROUPS: &[usize] = &[5];

/// Strip everything but ASCII digits.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Keep the digits of `raw`, truncated to the sum of `groups`, and join the
/// groups with dashes.
///
/// A separator is only inserted once a digit of the following group exists,
/// so partial input formats the way it is typed: `"1234"` with groups
/// `[3, 2, 4]` becomes `"123-4"`.
pub fn group_digits(raw: &str, groups: &[usize]) -> String {
    let capacity: usize = groups.iter().sum();
    let digits: Vec<char> = digits_only(raw).chars().take(capacity).collect();

    let mut formatted = String::with_capacity(capacity + groups.len());
    let mut start = 0;
    for &size in groups {
        if start >= digits.len() {
            break;
        }
        if start > 0 {
            formatted.push('-');
        }
        let end = (start + size).min(digits.len());
        formatted.extend(&digits[start..end]);
        start = end;
    }
    formatted
}

/// Format a patient ID as `DDD-DD-DDDD`, dropping digits beyond the ninth.
pub fn format_patient_id(raw: &str) -> String {
    group_digits(raw, PATIENT_ID_GROUPS)
}

/// Format a phone number as `DDD-DDD-DDDD`, dropping digits beyond the tenth.
pub fn format_phone(raw: &str) -> String {
    group_digits(raw, PHONE_GROUPS)
}

/// Keep at most five digits.
pub fn format_zip(raw: &str) -> String {
    group_digits(raw, ZIP_GROUPS)
}
