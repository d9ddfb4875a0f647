//! Stability and continuity: attendance, membership, and leadership.

use shg_core::config::ExtractorConfig;
use shg_core::models::StabilityFeatures;
use shg_core::observation::RawObservation;

use crate::stats::{clamp, mean, stddev};

/// Extract the five stability features.
pub fn extract(obs: &RawObservation, config: &ExtractorConfig) -> StabilityFeatures {
    let lo = config.effective_clamp_lo();
    let hi = config.effective_clamp_hi();

    let group_size = f64::from(obs.group_size.max(1));
    let dropout_rate = f64::from(obs.member_dropouts) / group_size * 100.0;

    StabilityFeatures {
        attendance_avg: clamp(mean(&obs.attendance_pct), lo, hi),
        attendance_std: stddev(&obs.attendance_pct),
        member_dropout_rate: clamp(dropout_rate, lo, hi),
        // Already normalized upstream; passed through unchanged.
        meeting_regularity: obs.meeting_frequency,
        leadership_changes: f64::from(obs.leadership_changes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_observation_is_neutral() {
        let features = extract(&RawObservation::default(), &ExtractorConfig::default());
        assert_eq!(features.attendance_avg, 0.0);
        assert_eq!(features.attendance_std, 0.0);
        assert_eq!(features.member_dropout_rate, 0.0);
        assert_eq!(features.meeting_regularity, 0.0);
        assert_eq!(features.leadership_changes, 0.0);
    }

    #[test]
    fn dropout_rate_relative_to_group_size() {
        let obs = RawObservation {
            member_dropouts: 3,
            group_size: 12,
            ..RawObservation::default()
        };
        let features = extract(&obs, &ExtractorConfig::default());
        assert_eq!(features.member_dropout_rate, 25.0);
    }

    #[test]
    fn zero_group_size_floors_to_one() {
        let obs = RawObservation {
            member_dropouts: 2,
            group_size: 0,
            ..RawObservation::default()
        };
        let features = extract(&obs, &ExtractorConfig::default());
        // 2 / max(0, 1) × 100 = 200, clamped to 100.
        assert_eq!(features.member_dropout_rate, 100.0);
    }

    #[test]
    fn attendance_avg_clamped_but_std_is_not() {
        let obs = RawObservation {
            attendance_pct: vec![150.0, 150.0],
            ..RawObservation::default()
        };
        let features = extract(&obs, &ExtractorConfig::default());
        assert_eq!(features.attendance_avg, 100.0);
        assert_eq!(features.attendance_std, 0.0);
    }

    #[test]
    fn passthrough_fields_unchanged() {
        let obs = RawObservation {
            meeting_frequency: 87.5,
            leadership_changes: 3,
            ..RawObservation::default()
        };
        let features = extract(&obs, &ExtractorConfig::default());
        assert_eq!(features.meeting_regularity, 87.5);
        assert_eq!(features.leadership_changes, 3.0);
    }
}
