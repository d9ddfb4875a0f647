//! The 17-feature vector and its four group structs.
//!
//! Each group is a plain struct with a fixed key set; the flat map view is
//! what the downstream scoring models consume. The groups use disjoint key
//! sets by construction (5 + 5 + 4 + 3), so merging them can never collide.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Financial discipline over savings and repayment behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialFeatures {
    /// Mean of the monthly savings series.
    pub avg_monthly_savings: f64,
    /// Population standard deviation of monthly savings.
    pub savings_std: f64,
    /// Share of months with strictly positive savings, 0–100.
    pub savings_regularity_pct: f64,
    /// Missed EMIs per reporting period, 0–100.
    pub emi_miss_rate: f64,
    /// Mean repayment delay in days. Unbounded.
    pub avg_repayment_delay: f64,
}

impl FinancialFeatures {
    /// Feature names in output order.
    pub const KEYS: [&'static str; 5] = [
        "AVG_MONTHLY_SAVINGS",
        "SAVINGS_STD",
        "SAVINGS_REGULARITY_PCT",
        "EMI_MISS_RATE",
        "AVG_REPAYMENT_DELAY",
    ];

    /// (name, value) pairs in [`Self::KEYS`] order.
    pub fn pairs(&self) -> [(&'static str, f64); 5] {
        [
            ("AVG_MONTHLY_SAVINGS", self.avg_monthly_savings),
            ("SAVINGS_STD", self.savings_std),
            ("SAVINGS_REGULARITY_PCT", self.savings_regularity_pct),
            ("EMI_MISS_RATE", self.emi_miss_rate),
            ("AVG_REPAYMENT_DELAY", self.avg_repayment_delay),
        ]
    }
}

/// Group stability and continuity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityFeatures {
    /// Mean attendance percentage, 0–100.
    pub attendance_avg: f64,
    /// Population standard deviation of attendance. Unbounded.
    pub attendance_std: f64,
    /// Dropouts relative to group size, 0–100.
    pub member_dropout_rate: f64,
    /// Meeting frequency passed through unchanged.
    pub meeting_regularity: f64,
    /// Leadership turnover, raw count.
    pub leadership_changes: f64,
}

impl StabilityFeatures {
    /// Feature names in output order.
    pub const KEYS: [&'static str; 5] = [
        "ATTENDANCE_AVG",
        "ATTENDANCE_STD",
        "MEMBER_DROPOUT_RATE",
        "MEETING_REGULARITY",
        "LEADERSHIP_CHANGES",
    ];

    /// (name, value) pairs in [`Self::KEYS`] order.
    pub fn pairs(&self) -> [(&'static str, f64); 5] {
        [
            ("ATTENDANCE_AVG", self.attendance_avg),
            ("ATTENDANCE_STD", self.attendance_std),
            ("MEMBER_DROPOUT_RATE", self.member_dropout_rate),
            ("MEETING_REGULARITY", self.meeting_regularity),
            ("LEADERSHIP_CHANGES", self.leadership_changes),
        ]
    }
}

/// Growth readiness: savings trajectory and credit absorption.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthFeatures {
    /// Whole-period savings growth (first-to-last), 0–100.
    pub savings_growth_rate: f64,
    /// Binary loan-usage indicator scaled to the percentage range.
    pub loan_utilization_score: f64,
    /// Loan principal relative to total savings, 0–100.
    pub loan_to_savings_ratio: f64,
    /// 100 minus income variance; assumes income is scaled to 0–100.
    pub income_stability_proxy: f64,
}

impl GrowthFeatures {
    /// Feature names in output order.
    pub const KEYS: [&'static str; 4] = [
        "SAVINGS_GROWTH_RATE",
        "LOAN_UTILIZATION_SCORE",
        "LOAN_TO_SAVINGS_RATIO",
        "INCOME_STABILITY_PROXY",
    ];

    /// (name, value) pairs in [`Self::KEYS`] order.
    pub fn pairs(&self) -> [(&'static str, f64); 4] {
        [
            ("SAVINGS_GROWTH_RATE", self.savings_growth_rate),
            ("LOAN_UTILIZATION_SCORE", self.loan_utilization_score),
            ("LOAN_TO_SAVINGS_RATIO", self.loan_to_savings_ratio),
            ("INCOME_STABILITY_PROXY", self.income_stability_proxy),
        ]
    }
}

/// Behavioral safety flags consumed by the anomaly detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorFeatures {
    /// Latest savings entry exceeds the jump multiple of its predecessor.
    pub sudden_savings_jump: bool,
    /// Latest attendance fell below the drop ratio of its predecessor.
    pub attendance_drop_flag: bool,
    /// The group has a recorded past default.
    pub past_default_flag: bool,
}

impl BehaviorFeatures {
    /// Feature names in output order.
    pub const KEYS: [&'static str; 3] = [
        "SUDDEN_SAVINGS_JUMP",
        "ATTENDANCE_DROP_FLAG",
        "PAST_DEFAULT_FLAG",
    ];

    /// (name, value) pairs in [`Self::KEYS`] order. Flags render 0.0/1.0.
    pub fn pairs(&self) -> [(&'static str, f64); 3] {
        [
            ("SUDDEN_SAVINGS_JUMP", flag(self.sudden_savings_jump)),
            ("ATTENDANCE_DROP_FLAG", flag(self.attendance_drop_flag)),
            ("PAST_DEFAULT_FLAG", flag(self.past_default_flag)),
        ]
    }
}

fn flag(set: bool) -> f64 {
    if set {
        1.0
    } else {
        0.0
    }
}

/// The four independently consumed feature groups.
///
/// Financial, stability, and growth feed continuous regressors; behavior
/// feeds a binary-flag anomaly detector. The key lists here are the
/// compatibility contract with the modeling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureGroup {
    Financial,
    Stability,
    Growth,
    Behavior,
}

impl FeatureGroup {
    /// All groups in aggregation order.
    pub const ALL: [FeatureGroup; 4] = [
        FeatureGroup::Financial,
        FeatureGroup::Stability,
        FeatureGroup::Growth,
        FeatureGroup::Behavior,
    ];

    /// Feature names belonging to this group, in output order.
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            Self::Financial => &FinancialFeatures::KEYS,
            Self::Stability => &StabilityFeatures::KEYS,
            Self::Growth => &GrowthFeatures::KEYS,
            Self::Behavior => &BehaviorFeatures::KEYS,
        }
    }
}

/// The complete feature vector for one observation.
///
/// Produced fresh per extraction and never mutated afterwards. Carries no
/// reference back to the raw input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub financial: FinancialFeatures,
    pub stability: StabilityFeatures,
    pub growth: GrowthFeatures,
    pub behavior: BehaviorFeatures,
}

impl FeatureVector {
    /// Total number of features across all groups.
    pub const LEN: usize = 17;

    /// All feature names in group order.
    pub fn all_keys() -> impl Iterator<Item = &'static str> {
        FeatureGroup::ALL.iter().flat_map(|g| g.keys().iter().copied())
    }

    /// All (name, value) pairs in group order.
    pub fn pairs(&self) -> Vec<(&'static str, f64)> {
        let mut pairs = Vec::with_capacity(Self::LEN);
        pairs.extend(self.financial.pairs());
        pairs.extend(self.stability.pairs());
        pairs.extend(self.growth.pairs());
        pairs.extend(self.behavior.pairs());
        pairs
    }

    /// (name, value) pairs restricted to one consumer group.
    pub fn group_pairs(&self, group: FeatureGroup) -> Vec<(&'static str, f64)> {
        match group {
            FeatureGroup::Financial => self.financial.pairs().to_vec(),
            FeatureGroup::Stability => self.stability.pairs().to_vec(),
            FeatureGroup::Growth => self.growth.pairs().to_vec(),
            FeatureGroup::Behavior => self.behavior.pairs().to_vec(),
        }
    }

    /// Value of a single feature by name.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.pairs().into_iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Flatten into a name → value map with exactly [`Self::LEN`] entries.
    ///
    /// Key disjointness is a design-time guarantee of the group structs,
    /// asserted here only in debug builds.
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        let mut map = BTreeMap::new();
        for (key, value) in self.pairs() {
            let previous = map.insert(key, value);
            debug_assert!(previous.is_none(), "duplicate feature key `{key}`");
        }
        debug_assert_eq!(map.len(), Self::LEN);
        map
    }
}
