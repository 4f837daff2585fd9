//! Current field values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::IntakeError;
use crate::field::FieldId;

/// Current raw or normalized value of every field.
///
/// Always holds an entry for each [`FieldId`]; fields never set read as `""`.
/// Deserializes from a JSON object keyed by wire name, filling in any missing
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<FieldId, String>")]
pub struct FormValues(BTreeMap<FieldId, String>);

impl FormValues {
    /// All fields empty.
    pub fn new() -> Self {
        Self(
            FieldId::ALL
                .into_iter()
                .map(|field| (field, String::new()))
                .collect(),
        )
    }

    /// Parses a JSON object of field values.
    pub fn from_json(json: &str) -> Result<Self, IntakeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Value of `field`.
    pub fn get(&self, field: FieldId) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or_default()
    }

    /// Replace the value of `field`.
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Iterate over all values in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.0.iter().map(|(field, value)| (*field, value.as_str()))
    }
}

impl Default for FormValues {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BTreeMap<FieldId, String>> for FormValues {
    fn from(map: BTreeMap<FieldId, String>) -> Self {
        let mut values = Self::new();
        values.0.extend(map);
        values
    }
}

impl<S: Into<String>> FromIterator<(FieldId, S)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (FieldId, S)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (field, value) in iter {
            values.set(field, value);
        }
        values
    }
}
