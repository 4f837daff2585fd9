//! Read-only summary shown before submitting.

use std::fmt;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::field::FieldId;
use crate::rules::parse_date;
use crate::values::FormValues;

const NONE: &str = "None";
const NOT_SPECIFIED: &str = "Not specified";
const MASKED_PATIENT_ID: &str = "***-**-****";
const MASKED_PASSWORD: &str = "********";

/// Lowest and highest health level on the slider.
pub const HEALTH_LEVEL_MIN: u8 = 1;
pub const HEALTH_LEVEL_MAX: u8 = 10;
const HEALTH_LEVEL_DEFAULT: u8 = 5;

/// Form inputs that carry no validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Supplementary {
    /// Free-text symptoms.
    pub symptoms: String,
    /// Checked medical history items.
    pub history: Vec<String>,
    pub gender: Option<String>,
    pub vaccinated: Option<String>,
    pub insurance: Option<String>,
    /// Self-reported health, 1 to 10.
    pub health_level: u8,
}

impl Default for Supplementary {
    fn default() -> Self {
        Self {
            symptoms: String::new(),
            history: Vec::new(),
            gender: None,
            vaccinated: None,
            insurance: None,
            health_level: HEALTH_LEVEL_DEFAULT,
        }
    }
}

impl Supplementary {
    /// Sets the health level, clamped to the slider range.
    pub fn with_health_level(mut self, level: u8) -> Self {
        self.health_level = level.clamp(HEALTH_LEVEL_MIN, HEALTH_LEVEL_MAX);
        self
    }
}

/// One labelled line of the review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRow {
    pub label: &'static str,
    pub value: String,
    /// Whether the row is backed by validated fields.
    pub validated: bool,
}

impl ReviewRow {
    fn validated(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            validated: true,
        }
    }

    fn info(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            validated: false,
        }
    }
}

/// Summary of a submittable form.
///
/// The patient ID and password are always masked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    rows: Vec<ReviewRow>,
}

impl ReviewSummary {
    /// Assemble the summary from normalized values.
    pub fn build(values: &FormValues, extras: &Supplementary) -> Self {
        let rows = vec![
            ReviewRow::validated("Name", full_name(values)),
            ReviewRow::validated("Date of Birth", display_date(values.get(FieldId::Dob))),
            ReviewRow::validated("Patient ID", MASKED_PATIENT_ID),
            ReviewRow::validated("Email", values.get(FieldId::Email)),
            ReviewRow::validated("Phone", values.get(FieldId::Phone)),
            ReviewRow::validated("Address", address_lines(values).join("\n")),
            ReviewRow::info("Symptoms", or_default(extras.symptoms.trim(), NONE)),
            ReviewRow::info("Medical History", history(&extras.history)),
            ReviewRow::info("Gender", choice(extras.gender.as_deref())),
            ReviewRow::info("Vaccinated", choice(extras.vaccinated.as_deref())),
            ReviewRow::info("Insurance", choice(extras.insurance.as_deref())),
            ReviewRow::info(
                "Health Level",
                format!(
                    "{} / {}",
                    extras.health_level.clamp(HEALTH_LEVEL_MIN, HEALTH_LEVEL_MAX),
                    HEALTH_LEVEL_MAX
                ),
            ),
            ReviewRow::info("User ID", values.get(FieldId::UserId)),
            ReviewRow::info("Password", MASKED_PASSWORD),
        ];
        Self { rows }
    }

    /// Value of the row labelled `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

impl fmt::Display for ReviewSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.rows.iter().map(|row| row.label.len()).max().unwrap_or(0) + 1;
        for row in &self.rows {
            let marker = if row.validated { "  ✓ pass" } else { "" };
            let mut lines = row.value.lines();
            let first = lines.next().unwrap_or_default();
            writeln!(f, "{:<width$} {}{}", format!("{}:", row.label), first, marker)?;
            for line in lines {
                writeln!(f, "{:<width$} {}", "", line)?;
            }
        }
        Ok(())
    }
}

/// `First M. Last`, with the initial omitted when blank.
fn full_name(values: &FormValues) -> String {
    let mut name = values.get(FieldId::FirstName).trim().to_string();
    let initial = values.get(FieldId::MiddleInitial).trim();
    if !initial.is_empty() {
        name.push(' ');
        name.push_str(initial);
        name.push('.');
    }
    name.push(' ');
    name.push_str(values.get(FieldId::LastName).trim());
    name
}

/// `M/D/YYYY`, or the raw value when it does not parse.
fn display_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        None => value.to_string(),
    }
}

fn address_lines(values: &FormValues) -> Vec<String> {
    let mut lines = vec![values.get(FieldId::Address1).trim().to_string()];
    let second = values.get(FieldId::Address2).trim();
    if !second.is_empty() {
        lines.push(second.to_string());
    }
    lines.push(format!(
        "{}, {} {}",
        values.get(FieldId::City).trim(),
        values.get(FieldId::State),
        values.get(FieldId::Zip)
    ));
    lines
}

fn history(items: &[String]) -> String {
    if items.is_empty() {
        NONE.to_string()
    } else {
        items.join(", ")
    }
}

fn choice(value: Option<&str>) -> String {
    or_default(value.unwrap_or_default().trim(), NOT_SPECIFIED)
}

fn or_default(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
