//! # shg-synthetic
//!
//! Seeded synthetic SHG dataset generation for model development.
//! Samples plausible group aggregates, derives rule-based target scores,
//! and exports the master dataset as CSV. Consumes the feature contract;
//! never defines it.

pub mod dataset;
pub mod error;
pub mod generator;
pub mod scores;

pub use dataset::{write_csv, SyntheticShgRecord};
pub use error::SyntheticError;
pub use generator::generate;
