//! Terminal rendering of verdicts.

use std::fmt::Write;

use clap::ValueEnum;
use intake_lib::{FieldId, Verdict, Verdicts, is_submittable};
use serde::Serialize;

/// Output format for verdict listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    submittable: bool,
    verdicts: &'a Verdicts,
}

/// Render every verdict followed by the gate decision.
pub fn render_verdicts(verdicts: &Verdicts, format: Format) -> anyhow::Result<String> {
    let submittable = is_submittable(verdicts);
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(&Report {
            submittable,
            verdicts,
        })?),
        Format::Text => {
            let width = FieldId::ALL
                .iter()
                .map(|field| field.as_str().len())
                .max()
                .unwrap_or(0);
            let mut out = String::new();
            for (field, verdict) in verdicts {
                writeln!(out, "{:<width$}  {}", field.as_str(), status(verdict))?;
            }
            let decision = if submittable {
                "Form is submittable"
            } else {
                "Form is not submittable"
            };
            writeln!(out, "\n{}", decision)?;
            Ok(out)
        }
    }
}

#[derive(Serialize)]
struct FieldReport<'a> {
    field: FieldId,
    value: &'a str,
    verdict: &'a Verdict,
}

/// Render a single verdict with the normalized value it was computed on.
pub fn render_verdict(
    field: FieldId,
    value: &str,
    verdict: &Verdict,
    format: Format,
) -> anyhow::Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(&FieldReport {
            field,
            value,
            verdict,
        })?),
        Format::Text => Ok(format!("{} = {:?}  {}", field.as_str(), value, status(verdict))),
    }
}

fn status(verdict: &Verdict) -> String {
    match (verdict.is_valid(), verdict.message()) {
        (true, "") => "ok".to_string(),
        (true, message) => message.to_string(),
        (false, message) => format!("✗ {}", message),
    }
}
