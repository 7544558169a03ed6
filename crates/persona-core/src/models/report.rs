use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::archetype::Archetype;
use super::profile::ProfileClassification;
use super::scores::{NormalizedScores, RawScores};
use super::validation::ValidationResult;
use crate::error::CoreError;

/// Full output of one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentReport {
    pub instrument_id: String,
    pub validation: ValidationResult,
    pub raw_scores: RawScores,
    pub normalized_scores: NormalizedScores,
    pub classification: ProfileClassification,
    pub archetype: Archetype,
}

impl AssessmentReport {
    /// Compact JSON; identical reports always serialize identically.
    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Rendered guidance text for a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Insights {
    pub headline: String,
    pub summary: String,
    pub next_steps: Vec<String>,
}
