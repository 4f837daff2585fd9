//! Form documents read from disk.

use std::fs;
use std::path::Path;

use anyhow::Context;
use intake_lib::{FormValues, IntakeError, Supplementary};
use serde::Deserialize;

/// A saved form: field values plus the non-validated extras.
///
/// ```json
/// { "fields": { "firstName": "Ada", "zip": "27514" }, "extras": { "healthLevel": 7 } }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IntakeDocument {
    pub fields: FormValues,
    pub extras: Supplementary,
}

impl IntakeDocument {
    pub fn parse(json: &str) -> Result<Self, IntakeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a document file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let document =
            Self::parse(&json).with_context(|| format!("Failed to parse {}", path.display()))?;
        log::debug!("Loaded form document from {}", path.display());
        Ok(document)
    }
}
