use crate::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ModelError {
    /// Text that names none of the known values of `kind`.
    #[error("Unknown Value Error: '{value}' is not a known {kind} {location}")]
    UnknownValue {
        kind: &'static str,
        value: String,
        location: ErrorLocation,
    },
}

impl ModelError {
    #[track_caller]
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        ModelError::UnknownValue {
            kind,
            value: value.into(),
            location: ErrorLocation::caller(),
        }
    }
}
