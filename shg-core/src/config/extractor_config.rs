//! Shared clamping and threshold policy for the feature extractors.

use serde::{Deserialize, Serialize};

/// Policy consumed by all four sub-extractors.
///
/// Centralized so the clamping bounds and behavioral thresholds cannot
/// drift between extractors.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Lower clamp bound for percentage-like features. Default: 0.0.
    pub clamp_lo: Option<f64>,
    /// Upper clamp bound for percentage-like features. Default: 100.0.
    pub clamp_hi: Option<f64>,
    /// Multiplier over the previous savings entry that flags a sudden jump.
    /// Default: 2.0.
    pub sudden_jump_multiplier: Option<f64>,
    /// Fraction of the previous attendance entry below which the drop flag
    /// fires. Default: 0.7.
    pub attendance_drop_ratio: Option<f64>,
}

impl ExtractorConfig {
    /// Returns the effective lower clamp bound, defaulting to 0.0.
    pub fn effective_clamp_lo(&self) -> f64 {
        self.clamp_lo.unwrap_or(0.0)
    }

    /// Returns the effective upper clamp bound, defaulting to 100.0.
    pub fn effective_clamp_hi(&self) -> f64 {
        self.clamp_hi.unwrap_or(100.0)
    }

    /// Returns the effective sudden-jump multiplier, defaulting to 2.0.
    pub fn effective_sudden_jump_multiplier(&self) -> f64 {
        self.sudden_jump_multiplier.unwrap_or(2.0)
    }

    /// Returns the effective attendance-drop ratio, defaulting to 0.7.
    pub fn effective_attendance_drop_ratio(&self) -> f64 {
        self.attendance_drop_ratio.unwrap_or(0.7)
    }
}
