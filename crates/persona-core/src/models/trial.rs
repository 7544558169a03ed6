use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One answered trial in a timed mini-game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrialResult {
    pub dimension: String,
    pub correct: bool,
    pub response_time_ms: u32,
}

/// Per-dimension summary of a mini-game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameResult {
    pub dimension: String,
    pub correct: u32,
    pub total: u32,
    pub avg_response_seconds: f64,
}

impl GameResult {
    /// Percentage of correct trials; 0 when nothing was played.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.correct) / f64::from(self.total) * 100.0
    }
}
