//! Synthetic generation errors.

use shg_core::errors::error_code::{self, ShgErrorCode};

/// Errors that can occur during dataset generation or export.
#[derive(Debug, thiserror::Error)]
pub enum SyntheticError {
    #[error("invalid distribution parameters: {message}")]
    Distribution { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ShgErrorCode for SyntheticError {
    fn error_code(&self) -> &'static str {
        error_code::SYNTHETIC_ERROR
    }
}
