use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A ranked outcome suggestion (career, study path, ...) attached to an
/// archetype. Static content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OutcomeMatch {
    pub title: String,
    pub match_percent: u32,
}

/// Pre-authored profile label resolved from a respondent's top dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Archetype {
    /// Lookup key, e.g. "RI", "MULTI", "memory+logic".
    pub key: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
    pub matches: Vec<OutcomeMatch>,
}
