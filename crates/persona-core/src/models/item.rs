use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Whether an item's answer is used as-is or reversed before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Polarity {
    Positive,
    /// Negatively-worded item; the answer is mirrored on the scale.
    Negative,
}

/// One scored axis of an assessment (a RIASEC letter, a VARK modality, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dimension {
    /// Short code used in archetype keys (e.g. "R", "V", "memory").
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// A single question. The wording is display content; scoring only needs
/// the dimension and polarity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentItem {
    pub id: String,
    pub dimension: String,
    pub polarity: Polarity,
    pub prompt: String,
}

/// Inclusive integer Likert scale, e.g. 1–5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LikertScale {
    pub min: i32,
    pub max: i32,
}

impl LikertScale {
    pub const FIVE_POINT: LikertScale = LikertScale { min: 1, max: 5 };

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Mirror a value on the scale: `min + max - value`. Saturates for
    /// values far off the scale.
    pub fn reverse(&self, value: i32) -> i32 {
        let mirrored = i64::from(self.min) + i64::from(self.max) - i64::from(value);
        saturate(mirrored)
    }

    pub fn is_extreme(&self, value: i32) -> bool {
        value == self.min || value == self.max
    }

    pub fn half_width(&self) -> f64 {
        (f64::from(self.max) - f64::from(self.min)) / 2.0
    }

    /// Check that `value` is on the scale for `item_id`.
    pub fn check(&self, item_id: &str, value: i32) -> Result<i32, CoreError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(CoreError::ValueOutOfScale {
                item_id: item_id.to_string(),
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Narrow an `i64` to `i32`, pinning at the bounds.
pub fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
