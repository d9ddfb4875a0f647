//! Synthetic dataset records and CSV export.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SyntheticError;

/// One synthetic SHG row. Field order is the master dataset column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct SyntheticShgRecord {
    pub shg_id: String,
    pub region: String,
    pub formation_year: i32,
    pub shg_age_years: i32,
    pub group_size: u32,
    pub bank_linked: u8,

    pub avg_monthly_savings: f64,
    pub savings_std: f64,
    pub savings_regularity_pct: f64,
    pub total_internal_lending: f64,
    pub emi_miss_rate: f64,
    pub avg_repayment_delay: f64,

    pub attendance_avg: f64,
    pub attendance_std: f64,
    pub member_dropout_rate: f64,
    pub meeting_regularity: f64,
    pub leadership_changes: u32,

    pub savings_growth_rate: f64,
    pub loan_utilization_score: f64,
    pub loan_to_savings_ratio: f64,
    pub income_stability_proxy: f64,

    pub anomaly_score: f64,
    pub sudden_savings_jump: u8,
    pub attendance_drop_flag: u8,
    pub past_default_flag: u8,

    pub financial_discipline_score: f64,
    pub stability_score: f64,
    pub growth_readiness_score: f64,
    pub behavioral_safety_score: f64,
    pub final_credit_score: f64,
}

/// Write records as CSV with a header row.
pub fn write_csv(path: &Path, records: &[SyntheticShgRecord]) -> Result<(), SyntheticError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
