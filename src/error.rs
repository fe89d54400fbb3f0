//! Rejection reasons produced by the validation layer
//!
//! Every outcome here is local and recoverable: the caller gets the reason
//! back for display and the settings record stays unchanged.

use thiserror::Error;

use crate::settings::FieldId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Proposed value is not a member of the field's closed domain
    #[error("'{value}' is not a valid value for {field}")]
    InvalidEnumValue { field: FieldId, value: String },

    /// Time correction does not name a real calendar date/time
    #[error("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02} is not a valid date/time")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    },

    /// Camera name must not be empty
    #[error("camera name must not be empty")]
    EmptyName,

    /// The field is a fixed constant in this simulation
    #[error("{field} is fixed and cannot be changed")]
    FixedField { field: FieldId },
}
