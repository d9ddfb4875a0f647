//! Error handling for the SHG pipeline.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod feature_error;
pub mod observation_error;

pub use config_error::ConfigError;
pub use error_code::ShgErrorCode;
pub use feature_error::FeatureError;
pub use observation_error::ObservationError;

/// Convenience alias for fallible pipeline operations.
pub type ShgResult<T> = Result<T, FeatureError>;
