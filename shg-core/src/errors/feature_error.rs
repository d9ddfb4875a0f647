//! Feature extraction errors.

use super::error_code::{self, ShgErrorCode};
use super::observation_error::ObservationError;

/// Errors surfaced by the feature engine.
///
/// Extraction over a validated observation is infallible; the only failure
/// path is the untyped-input boundary. `InvariantViolation` reports a
/// feature key collision between sub-extractors, which the typed group
/// structs make unreachable through the public API.
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    #[error("observation error: {0}")]
    Observation(#[from] ObservationError),

    #[error("feature key collision on `{key}`: sub-extractor key sets must be disjoint")]
    InvariantViolation { key: &'static str },
}

impl ShgErrorCode for FeatureError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Observation(e) => e.error_code(),
            Self::InvariantViolation { .. } => error_code::FEATURE_ERROR,
        }
    }
}
