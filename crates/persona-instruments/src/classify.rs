use persona_core::models::profile::{ProfileClassification, ProfileType};
use persona_core::models::scores::NormalizedScores;

use crate::config::ClassificationThresholds;
use crate::error::InstrumentError;

/// Pick primary/secondary dimensions and label the distribution shape.
///
/// Rules are checked in order and the first match wins: multimodal spread,
/// then a close top two, then a very high top score.
pub fn classify(
    scores: &NormalizedScores,
    thresholds: &ClassificationThresholds,
) -> Result<ProfileClassification, InstrumentError> {
    let ranked = scores.ranked();
    let [primary, secondary, ..] = ranked.as_slice() else {
        return Err(InstrumentError::TooFewDimensions {
            count: ranked.len(),
        });
    };
    let lowest = ranked.last().map_or(secondary.score, |s| s.score);

    let score_range = primary.score - lowest;
    let gap = primary.score - secondary.score;

    let profile_type = if score_range <= thresholds.balanced_range {
        ProfileType::Multimodal
    } else if gap <= thresholds.dual_gap {
        ProfileType::DualPreference
    } else if primary.score >= thresholds.specialized_min {
        ProfileType::Specialized
    } else {
        ProfileType::SingleDominant
    };

    let mean_score =
        scores.iter().map(|s| f64::from(s.score)).sum::<f64>() / scores.len() as f64;

    Ok(ProfileClassification {
        primary_dimension: primary.dimension.clone(),
        secondary_dimension: Some(secondary.dimension.clone()),
        profile_type,
        score_range,
        mean_score,
    })
}
