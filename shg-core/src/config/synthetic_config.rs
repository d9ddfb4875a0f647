//! Synthetic dataset generator configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the synthetic SHG dataset generator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SyntheticConfig {
    /// Number of synthetic groups to generate. Default: 800.
    pub num_groups: Option<u32>,
    /// RNG seed for reproducible datasets. Default: 42.
    pub seed: Option<u64>,
    /// Output path for the CSV dataset. Default: `shg_master_dataset.csv`.
    pub output_path: Option<String>,
}

impl SyntheticConfig {
    /// Returns the effective group count, defaulting to 800.
    pub fn effective_num_groups(&self) -> u32 {
        self.num_groups.unwrap_or(800)
    }

    /// Returns the effective RNG seed, defaulting to 42.
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(42)
    }

    /// Returns the effective output path.
    pub fn effective_output_path(&self) -> String {
        self.output_path
            .clone()
            .unwrap_or_else(|| "shg_master_dataset.csv".to_string())
    }
}
