//! Property tests over arbitrary observations.

use proptest::prelude::*;
use shg_core::config::ExtractorConfig;
use shg_core::models::FeatureVector;
use shg_core::observation::RawObservation;
use shg_features::stats;
use shg_features::FeatureEngine;

fn arb_observation() -> impl Strategy<Value = RawObservation> {
    (
        (
            prop::collection::vec(0.0f64..10_000.0, 0..24),
            0u32..60,
            prop::collection::vec(0.0f64..90.0, 0..24),
            prop::collection::vec(0.0f64..100.0, 0..24),
        ),
        (0u32..30, 0u32..30, 0.0f64..100.0, 0u32..10),
        (0.0f64..1_000_000.0, prop::collection::vec(0.0f64..200.0, 0..24), any::<bool>()),
    )
        .prop_map(
            |(
                (monthly_savings, emi_missed, repayment_delay_days, attendance_pct),
                (member_dropouts, group_size, meeting_frequency, leadership_changes),
                (total_loan_taken, income_proxy, past_default),
            )| RawObservation {
                monthly_savings,
                emi_missed,
                repayment_delay_days,
                attendance_pct,
                member_dropouts,
                group_size,
                meeting_frequency,
                leadership_changes,
                total_loan_taken,
                income_proxy,
                past_default,
            },
        )
}

// ── Output contract ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn always_exactly_17_finite_features(obs in arb_observation()) {
        let vector = FeatureEngine::default().extract(&obs);
        let map = vector.to_map();
        prop_assert_eq!(map.len(), FeatureVector::LEN);
        for (key, value) in &map {
            prop_assert!(value.is_finite(), "non-finite `{}`: {}", key, value);
        }
    }
}

proptest! {
    #[test]
    fn percentage_features_stay_in_bounds(obs in arb_observation()) {
        let vector = FeatureEngine::default().extract(&obs);
        let map = vector.to_map();
        for key in [
            "SAVINGS_REGULARITY_PCT",
            "EMI_MISS_RATE",
            "ATTENDANCE_AVG",
            "MEMBER_DROPOUT_RATE",
            "SAVINGS_GROWTH_RATE",
            "LOAN_TO_SAVINGS_RATIO",
            "INCOME_STABILITY_PROXY",
        ] {
            prop_assert!(
                (0.0..=100.0).contains(&map[key]),
                "`{}` out of bounds: {}",
                key,
                map[key]
            );
        }
    }
}

proptest! {
    #[test]
    fn flags_are_strictly_binary(obs in arb_observation()) {
        let vector = FeatureEngine::default().extract(&obs);
        let map = vector.to_map();
        for key in ["SUDDEN_SAVINGS_JUMP", "ATTENDANCE_DROP_FLAG", "PAST_DEFAULT_FLAG"] {
            prop_assert!(map[key] == 0.0 || map[key] == 1.0);
        }
        prop_assert!(
            map["LOAN_UTILIZATION_SCORE"] == 0.0 || map["LOAN_UTILIZATION_SCORE"] == 100.0
        );
    }
}

proptest! {
    #[test]
    fn extraction_is_idempotent(obs in arb_observation()) {
        let engine = FeatureEngine::default();
        prop_assert_eq!(engine.extract(&obs), engine.extract(&obs));
    }
}

// ── Statistics helpers ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn stddev_never_negative(values in prop::collection::vec(-1e6f64..1e6, 0..64)) {
        prop_assert!(stats::stddev(&values) >= 0.0);
    }
}

proptest! {
    #[test]
    fn clamp_always_within_default_bounds(value in -1e9f64..1e9) {
        let clamped = stats::clamp(value, 0.0, 100.0);
        prop_assert!((0.0..=100.0).contains(&clamped));
    }
}

proptest! {
    #[test]
    fn mean_bounded_by_extremes(values in prop::collection::vec(-1e6f64..1e6, 1..64)) {
        let m = stats::mean(&values);
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(m >= min - 1e-6 && m <= max + 1e-6);
    }
}

// ── Policy configuration ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn custom_clamp_bounds_are_honored(
        obs in arb_observation(),
        hi in 1.0f64..1000.0,
    ) {
        let engine = FeatureEngine::new(ExtractorConfig {
            clamp_hi: Some(hi),
            ..ExtractorConfig::default()
        });
        let vector = engine.extract(&obs);
        prop_assert!(vector.financial.emi_miss_rate <= hi);
        prop_assert!(vector.stability.member_dropout_rate <= hi);
        prop_assert!(vector.growth.savings_growth_rate <= hi);
    }
}
