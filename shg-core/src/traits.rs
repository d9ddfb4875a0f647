//! Trait seams between feature engineering and downstream consumers.

use serde_json::Value;

use crate::errors::ShgResult;
use crate::models::FeatureVector;
use crate::observation::RawObservation;

/// Feature extraction over raw observations.
pub trait IFeatureEngine: Send + Sync {
    /// Build the full feature vector from a validated observation.
    fn build(&self, observation: &RawObservation) -> FeatureVector;

    /// Validate an untyped JSON observation, then build.
    fn build_from_value(&self, raw: &Value) -> ShgResult<FeatureVector>;
}
