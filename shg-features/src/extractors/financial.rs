//! Financial discipline: savings consistency and repayment behavior.

use shg_core::config::ExtractorConfig;
use shg_core::models::FinancialFeatures;
use shg_core::observation::RawObservation;

use crate::stats::{clamp, mean, stddev};

/// Extract the five financial discipline features.
pub fn extract(obs: &RawObservation, config: &ExtractorConfig) -> FinancialFeatures {
    let savings = &obs.monthly_savings;
    let lo = config.effective_clamp_lo();
    let hi = config.effective_clamp_hi();

    // Denominator floors at 1: degenerate inputs yield neutral rates.
    let periods = savings.len().max(1) as f64;

    let regular_months = savings.iter().filter(|&&s| s > 0.0).count() as f64;
    let regularity_pct = regular_months / periods * 100.0;

    // Missed EMIs per reporting period, not per loan installment.
    let emi_miss_rate = f64::from(obs.emi_missed) / periods * 100.0;

    FinancialFeatures {
        avg_monthly_savings: mean(savings),
        savings_std: stddev(savings),
        savings_regularity_pct: clamp(regularity_pct, lo, hi),
        emi_miss_rate: clamp(emi_miss_rate, lo, hi),
        avg_repayment_delay: mean(&obs.repayment_delay_days),
    }
}
