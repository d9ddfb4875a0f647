//! Behavioral safety flags: abrupt changes and default history.

use shg_core::config::ExtractorConfig;
use shg_core::models::BehaviorFeatures;
use shg_core::observation::RawObservation;

/// Extract the three binary safety flags.
pub fn extract(obs: &RawObservation, config: &ExtractorConfig) -> BehaviorFeatures {
    let jump_multiplier = config.effective_sudden_jump_multiplier();
    let drop_ratio = config.effective_attendance_drop_ratio();

    let sudden_savings_jump = last_pair(&obs.monthly_savings)
        .map(|(prev, last)| last > jump_multiplier * prev)
        .unwrap_or(false);

    let attendance_drop_flag = last_pair(&obs.attendance_pct)
        .map(|(prev, last)| last < drop_ratio * prev)
        .unwrap_or(false);

    BehaviorFeatures {
        sudden_savings_jump,
        attendance_drop_flag,
        past_default_flag: obs.past_default,
    }
}

/// Last two entries of a series, oldest first.
fn last_pair(values: &[f64]) -> Option<(f64, f64)> {
    match values {
        [.., prev, last] => Some((*prev, *last)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_savings(savings: Vec<f64>) -> RawObservation {
        RawObservation {
            monthly_savings: savings,
            ..RawObservation::default()
        }
    }

    #[test]
    fn empty_observation_raises_no_flags() {
        let features = extract(&RawObservation::default(), &ExtractorConfig::default());
        assert!(!features.sudden_savings_jump);
        assert!(!features.attendance_drop_flag);
        assert!(!features.past_default_flag);
    }

    #[test]
    fn sudden_jump_requires_more_than_double() {
        let config = ExtractorConfig::default();
        // 250 > 2 × 100 → flag.
        assert!(extract(&with_savings(vec![100.0, 250.0]), &config).sudden_savings_jump);
        // 150 ≤ 200 → no flag.
        assert!(!extract(&with_savings(vec![100.0, 150.0]), &config).sudden_savings_jump);
        // Exactly double is not a jump.
        assert!(!extract(&with_savings(vec![100.0, 200.0]), &config).sudden_savings_jump);
    }

    #[test]
    fn jump_compares_only_the_last_two_entries() {
        // Early jump in the series is ignored.
        assert!(!extract(
            &with_savings(vec![100.0, 500.0, 510.0]),
            &ExtractorConfig::default()
        )
        .sudden_savings_jump);
    }

    #[test]
    fn attendance_drop_threshold() {
        let config = ExtractorConfig::default();
        let dropped = RawObservation {
            attendance_pct: vec![90.0, 50.0],
            ..RawObservation::default()
        };
        // 50 < 0.7 × 90 = 63 → flag.
        assert!(extract(&dropped, &config).attendance_drop_flag);

        let held = RawObservation {
            attendance_pct: vec![90.0, 70.0],
            ..RawObservation::default()
        };
        // 70 ≥ 63 → no flag.
        assert!(!extract(&held, &config).attendance_drop_flag);
    }

    #[test]
    fn single_entry_series_cannot_flag() {
        let obs = RawObservation {
            monthly_savings: vec![1000.0],
            attendance_pct: vec![40.0],
            ..RawObservation::default()
        };
        let features = extract(&obs, &ExtractorConfig::default());
        assert!(!features.sudden_savings_jump);
        assert!(!features.attendance_drop_flag);
    }

    #[test]
    fn past_default_passes_through() {
        let obs = RawObservation {
            past_default: true,
            ..RawObservation::default()
        };
        assert!(extract(&obs, &ExtractorConfig::default()).past_default_flag);
    }

    #[test]
    fn custom_thresholds_respected() {
        let config = ExtractorConfig {
            sudden_jump_multiplier: Some(3.0),
            attendance_drop_ratio: Some(0.5),
            ..ExtractorConfig::default()
        };
        // 250 ≤ 3 × 100 → no flag under the looser multiplier.
        assert!(!extract(&with_savings(vec![100.0, 250.0]), &config).sudden_savings_jump);

        let obs = RawObservation {
            attendance_pct: vec![90.0, 50.0],
            ..RawObservation::default()
        };
        // 50 ≥ 0.5 × 90 = 45 → no flag under the looser ratio.
        assert!(!extract(&obs, &config).attendance_drop_flag);
    }
}
