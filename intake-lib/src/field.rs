//! Form field identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IntakeError;

/// Identifies one field of the intake form.
///
/// Declaration order doubles as the evaluation order: every field is declared
/// after the fields its validator reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FirstName,
    MiddleInitial,
    LastName,
    Dob,
    PatientId,
    Email,
    Phone,
    Address1,
    Address2,
    City,
    State,
    Zip,
    UserId,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// All fields in evaluation order.
    pub const ALL: [FieldId; 15] = [
        Self::FirstName,
        Self::MiddleInitial,
        Self::LastName,
        Self::Dob,
        Self::PatientId,
        Self::Email,
        Self::Phone,
        Self::Address1,
        Self::Address2,
        Self::City,
        Self::State,
        Self::Zip,
        Self::UserId,
        Self::Password,
        Self::ConfirmPassword,
    ];

    /// Wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::MiddleInitial => "middleInitial",
            Self::LastName => "lastName",
            Self::Dob => "dob",
            Self::PatientId => "patientId",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address1 => "address1",
            Self::Address2 => "address2",
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
            Self::UserId => "userId",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::MiddleInitial => "Middle Initial",
            Self::LastName => "Last Name",
            Self::Dob => "Date of Birth",
            Self::PatientId => "Patient ID",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Address1 => "Address Line 1",
            Self::Address2 => "Address Line 2",
            Self::City => "City",
            Self::State => "State",
            Self::Zip => "ZIP",
            Self::UserId => "User ID",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    /// Whether an empty value fails validation.
    ///
    /// Only the middle initial and the second address line are optional.
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::MiddleInitial | Self::Address2)
    }

    /// Fields whose verdict reads this field's value.
    pub fn dependents(&self) -> &'static [FieldId] {
        match self {
            Self::FirstName | Self::LastName | Self::UserId => &[Self::Password],
            Self::Password => &[Self::ConfirmPassword],
            _ => &[],
        }
    }

    /// Iterator over the required fields.
    pub fn required() -> impl Iterator<Item = FieldId> {
        Self::ALL.into_iter().filter(FieldId::is_required)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = IntakeError;

    /// Accepts the camelCase wire name or its snake_case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| *c != '_').collect();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| IntakeError::UnknownField(s.to_string()))
    }
}
