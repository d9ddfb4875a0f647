//! Typed feature models shared across the workspace.

pub mod feature_vector;

pub use feature_vector::{
    BehaviorFeatures, FeatureGroup, FeatureVector, FinancialFeatures, GrowthFeatures,
    StabilityFeatures,
};
