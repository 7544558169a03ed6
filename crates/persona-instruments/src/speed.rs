//! Speed-adjusted scoring for timed mini-games.

use persona_core::models::item::Dimension;
use persona_core::models::trial::{GameResult, TrialResult};

pub const MAX_SPEED_BONUS: f64 = 20.0;

/// Each this many seconds of average response time costs one bonus point.
pub const SECONDS_PER_BONUS_POINT: f64 = 2.0;

/// Bonus for answering quickly: `20 − seconds / 2`, clamped to [0, 20].
/// Slow or non-finite times earn nothing; they are never penalized.
pub fn speed_bonus(avg_response_seconds: f64) -> f64 {
    if !avg_response_seconds.is_finite() {
        return 0.0;
    }
    (MAX_SPEED_BONUS - avg_response_seconds / SECONDS_PER_BONUS_POINT).clamp(0.0, MAX_SPEED_BONUS)
}

/// `min(100, accuracy + bonus)`, rounded.
pub fn speed_adjusted_score(accuracy_percent: f64, avg_response_seconds: f64) -> u32 {
    let accuracy = if accuracy_percent.is_finite() {
        accuracy_percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    (accuracy + speed_bonus(avg_response_seconds))
        .min(100.0)
        .round() as u32
}

/// Final 0–100 score for a game. An unplayed game scores 0.
pub fn game_score(game: &GameResult) -> u32 {
    if game.total == 0 {
        return 0;
    }
    speed_adjusted_score(game.accuracy(), game.avg_response_seconds)
}

/// Collapse raw trials into one result per dimension, in dimension order.
/// Trials for unknown dimensions are dropped.
pub fn summarize_trials(trials: &[TrialResult], dimensions: &[Dimension]) -> Vec<GameResult> {
    dimensions
        .iter()
        .map(|dimension| {
            let played: Vec<&TrialResult> = trials
                .iter()
                .filter(|t| t.dimension == dimension.code)
                .collect();
            let total = played.len() as u32;
            let correct = played.iter().filter(|t| t.correct).count() as u32;
            let avg_response_seconds = if played.is_empty() {
                0.0
            } else {
                played
                    .iter()
                    .map(|t| f64::from(t.response_time_ms))
                    .sum::<f64>()
                    / played.len() as f64
                    / 1000.0
            };
            GameResult {
                dimension: dimension.code.clone(),
                correct,
                total,
                avg_response_seconds,
            }
        })
        .collect()
}
