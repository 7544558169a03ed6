use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Signed raw sum for one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawScore {
    pub dimension: String,
    pub score: i32,
    /// Number of items the instrument defines for this dimension.
    pub item_count: u32,
}

/// Raw sums in the instrument's dimension order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct RawScores(pub Vec<RawScore>);

impl RawScores {
    pub fn get(&self, dimension: &str) -> Option<i32> {
        self.0
            .iter()
            .find(|s| s.dimension == dimension)
            .map(|s| s.score)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RawScore> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// 0–100 score for one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionScore {
    pub dimension: String,
    pub score: u32,
}

impl DimensionScore {
    pub fn new(dimension: impl Into<String>, score: u32) -> Self {
        Self {
            dimension: dimension.into(),
            score,
        }
    }
}

/// Normalized scores in the instrument's dimension order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct NormalizedScores(pub Vec<DimensionScore>);

impl NormalizedScores {
    pub fn get(&self, dimension: &str) -> Option<u32> {
        self.0
            .iter()
            .find(|s| s.dimension == dimension)
            .map(|s| s.score)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DimensionScore> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Scores sorted highest first. Ties keep dimension order.
    pub fn ranked(&self) -> Vec<&DimensionScore> {
        let mut ranked: Vec<_> = self.0.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}

impl FromIterator<DimensionScore> for NormalizedScores {
    fn from_iter<I: IntoIterator<Item = DimensionScore>>(iter: I) -> Self {
        NormalizedScores(iter.into_iter().collect())
    }
}
