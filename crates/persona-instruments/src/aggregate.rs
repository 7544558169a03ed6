use std::collections::HashMap;

use persona_core::models::item::{AssessmentItem, Dimension, LikertScale, Polarity, saturate};
use persona_core::models::response::ResponseSet;
use persona_core::models::scores::{RawScore, RawScores};

/// Sum answers per dimension, reversing negatively-worded items.
///
/// Answers to unknown items are skipped. Sums are kept in `i64` and
/// saturate to `i32`, so off-scale values cannot overflow. Every dimension is present in the
/// output, in definition order, even when nothing was answered for it.
pub fn aggregate(
    responses: &ResponseSet,
    items: &[AssessmentItem],
    dimensions: &[Dimension],
    scale: LikertScale,
) -> RawScores {
    let by_id: HashMap<&str, &AssessmentItem> =
        items.iter().map(|item| (item.id.as_str(), item)).collect();

    let mut totals: HashMap<&str, i64> = HashMap::new();
    let mut skipped = 0usize;
    for response in responses {
        let Some(item) = by_id.get(response.item_id.as_str()) else {
            skipped += 1;
            continue;
        };
        let effective = match item.polarity {
            Polarity::Positive => response.value,
            Polarity::Negative => scale.reverse(response.value),
        };
        *totals.entry(item.dimension.as_str()).or_insert(0) += i64::from(effective);
    }
    if skipped > 0 {
        tracing::debug!(skipped, "ignored responses to unknown items");
    }

    RawScores(
        dimensions
            .iter()
            .map(|dimension| RawScore {
                dimension: dimension.code.clone(),
                score: saturate(totals.get(dimension.code.as_str()).copied().unwrap_or(0)),
                item_count: item_count(items, &dimension.code),
            })
            .collect(),
    )
}

pub fn item_count(items: &[AssessmentItem], dimension: &str) -> u32 {
    items.iter().filter(|item| item.dimension == dimension).count() as u32
}
