//! Configuration system for the SHG pipeline.
//! TOML-based, layered resolution: env > project > defaults.

pub mod extractor_config;
pub mod shg_config;
pub mod synthetic_config;

pub use extractor_config::ExtractorConfig;
pub use shg_config::ShgConfig;
pub use synthetic_config::SyntheticConfig;
