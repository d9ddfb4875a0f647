//! Growth readiness: savings trajectory and credit absorption.

use shg_core::config::ExtractorConfig;
use shg_core::models::GrowthFeatures;
use shg_core::observation::RawObservation;

use crate::stats::{clamp, stddev};

/// Extract the four growth readiness features.
pub fn extract(obs: &RawObservation, config: &ExtractorConfig) -> GrowthFeatures {
    let savings = &obs.monthly_savings;
    let lo = config.effective_clamp_lo();
    let hi = config.effective_clamp_hi();

    // Whole-period growth (first-to-last), not period-over-period.
    let growth_rate = match (savings.first(), savings.last()) {
        (Some(&first), Some(&last)) if savings.len() >= 2 => {
            (last - first) / first.max(1.0) * 100.0
        }
        _ => 0.0,
    };

    // Binary indicator scaled to the percentage range, not a true
    // utilization ratio.
    let loan_utilization_score = if obs.total_loan_taken > 0.0 { 100.0 } else { 0.0 };

    let total_savings: f64 = savings.iter().sum();
    let loan_to_savings = obs.total_loan_taken / total_savings.max(1.0) * 100.0;

    // Assumes income_proxy is scaled comparably to 0–100 by the caller.
    let income_stability = 100.0 - stddev(&obs.income_proxy);

    GrowthFeatures {
        savings_growth_rate: clamp(growth_rate, lo, hi),
        loan_utilization_score,
        loan_to_savings_ratio: clamp(loan_to_savings, lo, hi),
        income_stability_proxy: clamp(income_stability, lo, hi),
    }
}
