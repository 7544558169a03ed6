use persona_core::models::item::LikertScale;
use persona_core::models::scores::{DimensionScore, NormalizedScores, RawScores};

/// Rescale every raw sum onto 0–100.
pub fn normalize(raw: &RawScores, scale: LikertScale) -> NormalizedScores {
    raw.iter()
        .map(|s| {
            DimensionScore::new(
                s.dimension.clone(),
                normalize_score(s.score, s.item_count, scale),
            )
        })
        .collect()
}

/// Linear rescale of `raw` between `item_count × scale.min` and
/// `item_count × scale.max`, rounded half away from zero and clamped to
/// [0, 100]. A dimension without items scores 0.
pub fn normalize_score(raw: i32, item_count: u32, scale: LikertScale) -> u32 {
    let min_possible = i64::from(item_count) * i64::from(scale.min);
    let max_possible = i64::from(item_count) * i64::from(scale.max);
    if max_possible == min_possible {
        return 0;
    }
    let ratio = (i64::from(raw) - min_possible) as f64 / (max_possible - min_possible) as f64;
    (ratio * 100.0).round().clamp(0.0, 100.0) as u32
}
