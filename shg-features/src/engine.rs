//! FeatureEngine — runs the four sub-extractors over one observation and
//! composes the complete feature vector.

use serde_json::Value;
use tracing::debug;

use shg_core::config::ExtractorConfig;
use shg_core::errors::ShgResult;
use shg_core::models::FeatureVector;
use shg_core::observation::RawObservation;
use shg_core::traits::IFeatureEngine;

use crate::extractors::{behavior, financial, growth, stability};

/// The 4-group feature engine.
///
/// Stateless and referentially transparent: the same observation always
/// produces the same vector. The groups read overlapping input fields but
/// write disjoint features, so extraction order is irrelevant and calls
/// are trivially safe to run concurrently.
pub struct FeatureEngine {
    config: ExtractorConfig,
}

impl FeatureEngine {
    /// Create an engine with the given extraction policy.
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Engine configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract all four feature groups from a validated observation.
    ///
    /// Infallible: malformed values cannot survive observation validation,
    /// and degenerate inputs (empty series, zero group size) resolve to
    /// the documented neutral defaults.
    pub fn extract(&self, obs: &RawObservation) -> FeatureVector {
        let financial = financial::extract(obs, &self.config);
        let stability = stability::extract(obs, &self.config);
        let growth = growth::extract(obs, &self.config);
        let behavior = behavior::extract(obs, &self.config);

        FeatureVector {
            financial,
            stability,
            growth,
            behavior,
        }
    }

    /// Validate an untyped JSON observation and extract.
    ///
    /// Fails whole on the first malformed field — callers never see a
    /// partially populated vector.
    pub fn extract_from_value(&self, raw: &Value) -> ShgResult<FeatureVector> {
        let obs = RawObservation::from_value(raw)?;
        debug!(
            savings_periods = obs.monthly_savings.len(),
            attendance_periods = obs.attendance_pct.len(),
            "observation validated"
        );
        Ok(self.extract(&obs))
    }
}

impl Default for FeatureEngine {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl IFeatureEngine for FeatureEngine {
    fn build(&self, observation: &RawObservation) -> FeatureVector {
        self.extract(observation)
    }

    fn build_from_value(&self, raw: &Value) -> ShgResult<FeatureVector> {
        self.extract_from_value(raw)
    }
}

/// Build the 17-feature vector from an untyped raw observation using the
/// default extraction policy.
pub fn build_feature_vector(raw: &Value) -> ShgResult<FeatureVector> {
    FeatureEngine::default().extract_from_value(raw)
}
