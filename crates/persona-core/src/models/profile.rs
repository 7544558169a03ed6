use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Shape of a score distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProfileType {
    /// All scores sit close together; no clear preference.
    Multimodal,
    /// Two leading dimensions within a small gap of each other.
    DualPreference,
    /// One very strong dimension.
    Specialized,
    SingleDominant,
}

impl ProfileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileType::Multimodal => "multimodal",
            ProfileType::DualPreference => "dual_preference",
            ProfileType::Specialized => "specialized",
            ProfileType::SingleDominant => "single_dominant",
        }
    }
}

impl std::fmt::Display for ProfileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfileClassification {
    pub primary_dimension: String,
    pub secondary_dimension: Option<String>,
    pub profile_type: ProfileType,
    /// Highest minus lowest normalized score across all dimensions.
    pub score_range: u32,
    pub mean_score: f64,
}
