//! The per-field rule set.
//!
//! Every validator is total: any string, including empty or malformed input,
//! produces a [`Verdict`]. [`validate_field`] is the single dispatch point that
//! applies a field's normalization and then its rule.

mod account;
mod contact;
mod identity;

pub use account::{
    PASSWORD_SPECIALS, PasswordContext, validate_confirm_password, validate_password,
    validate_user_id,
};
pub use contact::{
    validate_address1, validate_address2, validate_city, validate_email, validate_phone,
    validate_state, validate_zip,
};
pub use identity::{
    validate_dob, validate_first_name, validate_last_name, validate_middle_initial,
    validate_patient_id,
};

pub(crate) use identity::parse_date;

use crate::config::ValidationConfig;
use crate::field::FieldId;
use crate::validation::{Verdict, format_patient_id, format_phone, format_zip};
use crate::values::FormValues;

impl FieldId {
    /// Rewrite a raw value into the form the field stores.
    ///
    /// Digit fields are reformatted, email and user ID are trimmed and
    /// lowercased. Every other field is stored as typed.
    pub fn normalize(&self, raw: &str) -> String {
        match self {
            Self::PatientId => format_patient_id(raw),
            Self::Phone => format_phone(raw),
            Self::Zip => format_zip(raw),
            Self::Email | Self::UserId => raw.trim().to_lowercase(),
            _ => raw.to_string(),
        }
    }
}

/// Normalize `field`'s current value and run its rule.
///
/// Password and its confirmation read their related fields from `values`.
pub fn validate_field(field: FieldId, values: &FormValues, config: &ValidationConfig) -> Verdict {
    let value = field.normalize(values.get(field));
    let verdict = match field {
        FieldId::FirstName => validate_first_name(&value),
        FieldId::MiddleInitial => validate_middle_initial(&value),
        FieldId::LastName => validate_last_name(&value),
        FieldId::Dob => validate_dob(&value, config.today(), config.max_age_years),
        FieldId::PatientId => validate_patient_id(&value),
        FieldId::Email => validate_email(&value),
        FieldId::Phone => validate_phone(&value),
        FieldId::Address1 => validate_address1(&value),
        FieldId::Address2 => validate_address2(&value),
        FieldId::City => validate_city(&value),
        FieldId::State => validate_state(&value),
        FieldId::Zip => validate_zip(&value),
        FieldId::UserId => validate_user_id(&value),
        FieldId::Password => {
            let related = PasswordContext::new(
                values.get(FieldId::UserId),
                values.get(FieldId::FirstName),
                values.get(FieldId::LastName),
            );
            validate_password(&value, &related)
        }
        FieldId::ConfirmPassword => {
            validate_confirm_password(&value, values.get(FieldId::Password))
        }
    };
    log::trace!("{} -> {:?}", field, verdict);
    verdict
}
