//! Patient intake form validation
//!
//! Per-field validation rules, as-you-type formatters and the submission gate
//! for a patient registration form. Rendering and input wiring belong to the
//! caller; this crate only decides.

pub mod error;
pub mod rules;
pub mod validation;

mod config;
mod field;
mod form;
mod gate;
mod review;
mod values;

pub use config::*;
pub use error::IntakeError;
pub use field::FieldId;
pub use form::*;
pub use gate::*;
pub use review::*;
pub use rules::validate_field;
pub use validation::{Verdict, Verdicts};
pub use values::FormValues;
