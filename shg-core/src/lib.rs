//! # shg-core
//!
//! Foundation crate for the SHG credit feature pipeline.
//! Defines the raw observation schema, the typed feature-vector models,
//! errors, config, and traits. Every other crate in the workspace depends
//! on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod observation;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ShgConfig;
pub use errors::{FeatureError, ObservationError, ShgResult};
pub use models::{FeatureGroup, FeatureVector};
pub use observation::RawObservation;
