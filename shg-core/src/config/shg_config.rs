//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ExtractorConfig, SyntheticConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SHG_*`)
/// 2. Project config (`shg.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShgConfig {
    pub extractor: ExtractorConfig,
    pub synthetic: SyntheticConfig,
}

impl ShgConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("shg.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ShgConfig) -> Result<(), ConfigError> {
        let lo = config.extractor.effective_clamp_lo();
        let hi = config.extractor.effective_clamp_hi();
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(ConfigError::ValidationFailed {
                field: "extractor.clamp_lo".to_string(),
                message: "clamp bounds must be finite with clamp_lo < clamp_hi".to_string(),
            });
        }
        let multiplier = config.extractor.effective_sudden_jump_multiplier();
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "extractor.sudden_jump_multiplier".to_string(),
                message: "must be a positive finite number".to_string(),
            });
        }
        let ratio = config.extractor.effective_attendance_drop_ratio();
        if !(0.0..=1.0).contains(&ratio) {
            return Err(ConfigError::ValidationFailed {
                field: "extractor.attendance_drop_ratio".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        if let Some(num_groups) = config.synthetic.num_groups {
            if num_groups == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "synthetic.num_groups".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ShgConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: ShgConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` value.
    fn merge(base: &mut ShgConfig, other: &ShgConfig) {
        // Extractor
        if other.extractor.clamp_lo.is_some() {
            base.extractor.clamp_lo = other.extractor.clamp_lo;
        }
        if other.extractor.clamp_hi.is_some() {
            base.extractor.clamp_hi = other.extractor.clamp_hi;
        }
        if other.extractor.sudden_jump_multiplier.is_some() {
            base.extractor.sudden_jump_multiplier = other.extractor.sudden_jump_multiplier;
        }
        if other.extractor.attendance_drop_ratio.is_some() {
            base.extractor.attendance_drop_ratio = other.extractor.attendance_drop_ratio;
        }

        // Synthetic
        if other.synthetic.num_groups.is_some() {
            base.synthetic.num_groups = other.synthetic.num_groups;
        }
        if other.synthetic.seed.is_some() {
            base.synthetic.seed = other.synthetic.seed;
        }
        if other.synthetic.output_path.is_some() {
            base.synthetic.output_path = other.synthetic.output_path.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SHG_EXTRACTOR_CLAMP_HI`, `SHG_SYNTHETIC_NUM_GROUPS`, etc.
    fn apply_env_overrides(config: &mut ShgConfig) {
        if let Ok(val) = std::env::var("SHG_EXTRACTOR_CLAMP_LO") {
            if let Ok(v) = val.parse::<f64>() {
                config.extractor.clamp_lo = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SHG_EXTRACTOR_CLAMP_HI") {
            if let Ok(v) = val.parse::<f64>() {
                config.extractor.clamp_hi = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SHG_EXTRACTOR_SUDDEN_JUMP_MULTIPLIER") {
            if let Ok(v) = val.parse::<f64>() {
                config.extractor.sudden_jump_multiplier = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SHG_EXTRACTOR_ATTENDANCE_DROP_RATIO") {
            if let Ok(v) = val.parse::<f64>() {
                config.extractor.attendance_drop_ratio = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SHG_SYNTHETIC_NUM_GROUPS") {
            if let Ok(v) = val.parse::<u32>() {
                config.synthetic.num_groups = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SHG_SYNTHETIC_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.synthetic.seed = Some(v);
            }
        }
    }
}
