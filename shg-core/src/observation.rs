//! Raw observation schema for one SHG reporting period.
//!
//! The upstream data source reports an untyped JSON object with ad hoc
//! field names. `RawObservation` is the validated boundary: every field is
//! optional, absence resolves to a documented default, and a wrong-typed
//! value fails fast naming the offending field. Internal arithmetic never
//! needs defensive type checks after this point.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::ObservationError;

/// One SHG's reporting period, with per-field defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawObservation {
    /// Chronological savings per month. Default: empty.
    pub monthly_savings: Vec<f64>,
    /// Missed EMI count over the period. Default: 0.
    pub emi_missed: u32,
    /// Repayment delays in days. Default: empty.
    pub repayment_delay_days: Vec<f64>,
    /// Chronological meeting attendance percentages. Default: empty.
    pub attendance_pct: Vec<f64>,
    /// Members who left the group. Default: 0.
    pub member_dropouts: u32,
    /// Current member count. Default: 1.
    pub group_size: u32,
    /// Meeting frequency, already normalized upstream. Default: 0.
    pub meeting_frequency: f64,
    /// Leadership turnover count. Default: 0.
    pub leadership_changes: u32,
    /// Total loan principal taken. Default: 0.
    pub total_loan_taken: f64,
    /// Income proxy series, scaled comparably to 0–100. Default: empty.
    pub income_proxy: Vec<f64>,
    /// Whether the group has defaulted before. Default: false.
    pub past_default: bool,
}

impl Default for RawObservation {
    fn default() -> Self {
        Self {
            monthly_savings: Vec::new(),
            emi_missed: 0,
            repayment_delay_days: Vec::new(),
            attendance_pct: Vec::new(),
            member_dropouts: 0,
            group_size: 1,
            meeting_frequency: 0.0,
            leadership_changes: 0,
            total_loan_taken: 0.0,
            income_proxy: Vec::new(),
            past_default: false,
        }
    }
}

impl RawObservation {
    /// Validate an untyped JSON object into a typed observation.
    ///
    /// Missing fields resolve to their defaults, unrecognized fields are
    /// ignored (forward-compatible), and a wrong-typed value is an error
    /// naming the field.
    pub fn from_value(raw: &Value) -> Result<Self, ObservationError> {
        let map = raw.as_object().ok_or(ObservationError::NotAnObject {
            found: json_type(raw),
        })?;

        let mut obs = Self::default();
        for (key, value) in map {
            match key.as_str() {
                "monthly_savings" => obs.monthly_savings = number_seq("monthly_savings", value)?,
                "emi_missed" => obs.emi_missed = count("emi_missed", value)?,
                "repayment_delay_days" => {
                    obs.repayment_delay_days = number_seq("repayment_delay_days", value)?;
                }
                "attendance_pct" => obs.attendance_pct = number_seq("attendance_pct", value)?,
                "member_dropouts" => obs.member_dropouts = count("member_dropouts", value)?,
                "group_size" => obs.group_size = count("group_size", value)?,
                "meeting_frequency" => {
                    obs.meeting_frequency = number("meeting_frequency", value)?;
                }
                "leadership_changes" => {
                    obs.leadership_changes = count("leadership_changes", value)?;
                }
                "total_loan_taken" => obs.total_loan_taken = number("total_loan_taken", value)?,
                "income_proxy" => obs.income_proxy = number_seq("income_proxy", value)?,
                "past_default" => obs.past_default = boolean("past_default", value)?,
                other => debug!(field = other, "ignoring unrecognized observation field"),
            }
        }

        // Range anomalies are not rejected: downstream clamping bounds the
        // derived features.
        if obs
            .attendance_pct
            .iter()
            .any(|a| !(0.0..=100.0).contains(a))
        {
            warn!("attendance_pct entries outside [0, 100]");
        }

        Ok(obs)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn number(field: &'static str, value: &Value) -> Result<f64, ObservationError> {
    let n = value.as_f64().ok_or_else(|| ObservationError::InvalidField {
        field,
        expected: "number",
        found: json_type(value).to_string(),
    })?;
    if !n.is_finite() {
        return Err(ObservationError::InvalidField {
            field,
            expected: "finite number",
            found: n.to_string(),
        });
    }
    Ok(n)
}

fn count(field: &'static str, value: &Value) -> Result<u32, ObservationError> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| ObservationError::InvalidField {
            field,
            expected: "non-negative integer",
            found: value.to_string(),
        })
}

fn boolean(field: &'static str, value: &Value) -> Result<bool, ObservationError> {
    value.as_bool().ok_or_else(|| ObservationError::InvalidField {
        field,
        expected: "boolean",
        found: json_type(value).to_string(),
    })
}

fn number_seq(field: &'static str, value: &Value) -> Result<Vec<f64>, ObservationError> {
    let entries = value.as_array().ok_or_else(|| ObservationError::InvalidField {
        field,
        expected: "array of numbers",
        found: json_type(value).to_string(),
    })?;
    entries.iter().map(|v| number(field, v)).collect()
}
