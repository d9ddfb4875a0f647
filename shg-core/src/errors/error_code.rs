//! Stable string error codes for logs and downstream consumers.

pub const CONFIG_ERROR: &str = "SHG_CONFIG_ERROR";
pub const OBSERVATION_ERROR: &str = "SHG_OBSERVATION_ERROR";
pub const FEATURE_ERROR: &str = "SHG_FEATURE_ERROR";
pub const SYNTHETIC_ERROR: &str = "SHG_SYNTHETIC_ERROR";

/// Maps an error to its stable string code.
pub trait ShgErrorCode {
    fn error_code(&self) -> &'static str;
}
