//! # shg-features
//!
//! Deterministic feature engineering for SHG credit scoring.
//! Maps one raw group observation to the 17-feature vector consumed by the
//! downstream scoring models. Pure and synchronous: same input, same
//! output, no shared state between calls.

pub mod engine;
pub mod extractors;
pub mod stats;

pub use engine::{build_feature_vector, FeatureEngine};
