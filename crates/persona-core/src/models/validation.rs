use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Response-quality verdict for a full answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Human-readable warnings, in rule order.
    pub issues: Vec<String>,
    /// 1.0 minus the penalties of every triggered rule, floored at 0.
    pub consistency_score: f64,
    pub confidence_level: f64,
}

impl ValidationResult {
    pub fn empty() -> Self {
        Self {
            is_valid: false,
            issues: vec!["No responses provided".to_string()],
            consistency_score: 0.0,
            confidence_level: 0.0,
        }
    }
}
