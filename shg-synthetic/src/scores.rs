//! Rule-based target scores for synthetic training data.
//!
//! Linear formulas over the sampled aggregates, each clamped to [0, 100].
//! These are the labels the group-wise regressors train against.

fn clamp_score(value: f64) -> f64 {
    value.min(100.0).max(0.0)
}

/// Financial discipline: penalize missed EMIs and volatile savings,
/// reward regularity.
pub fn financial_discipline(
    emi_miss_rate: f64,
    savings_std: f64,
    savings_regularity_pct: f64,
) -> f64 {
    clamp_score(100.0 - emi_miss_rate * 50.0 - savings_std / 50.0 + savings_regularity_pct * 0.3)
}

/// Stability: attendance level minus volatility, dropouts, and leadership
/// churn.
pub fn stability(
    attendance_avg: f64,
    attendance_std: f64,
    member_dropout_rate: f64,
    leadership_changes: u32,
) -> f64 {
    clamp_score(
        attendance_avg
            - attendance_std * 1.2
            - member_dropout_rate * 40.0
            - f64::from(leadership_changes) * 3.0,
    )
}

/// Growth readiness: savings trajectory and loan usage minus leverage.
pub fn growth_readiness(
    savings_growth_rate: f64,
    loan_utilization_score: f64,
    loan_to_savings_ratio: f64,
) -> f64 {
    clamp_score(
        savings_growth_rate * 120.0 + loan_utilization_score * 0.6 - loan_to_savings_ratio * 8.0,
    )
}

/// Behavioral safety: penalize anomaly mass, attendance drops, and past
/// defaults.
pub fn behavioral_safety(
    anomaly_score: f64,
    attendance_drop_flag: u8,
    past_default_flag: u8,
) -> f64 {
    clamp_score(
        100.0
            - anomaly_score * 60.0
            - f64::from(attendance_drop_flag) * 15.0
            - f64::from(past_default_flag) * 25.0,
    )
}

/// Weighted composite credit score with a small uniform baseline term.
pub fn final_credit(
    financial_discipline_score: f64,
    stability_score: f64,
    growth_readiness_score: f64,
    behavioral_safety_score: f64,
    baseline: f64,
) -> f64 {
    clamp_score(
        0.30 * financial_discipline_score
            + 0.25 * stability_score
            + 0.20 * growth_readiness_score
            + 0.15 * behavioral_safety_score
            + 0.10 * baseline,
    )
}
