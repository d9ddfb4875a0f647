//! Raw-observation ingestion errors.

use super::error_code::{self, ShgErrorCode};

/// Errors raised while validating a raw observation at the JSON boundary.
///
/// A missing field is never an error (defaults apply); a wrong-typed value
/// fails fast naming the offending field so the fault never reaches
/// feature arithmetic.
#[derive(Debug, thiserror::Error)]
pub enum ObservationError {
    #[error("raw observation must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("invalid field `{field}`: expected {expected}, got {found}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}

impl ShgErrorCode for ObservationError {
    fn error_code(&self) -> &'static str {
        error_code::OBSERVATION_ERROR
    }
}
