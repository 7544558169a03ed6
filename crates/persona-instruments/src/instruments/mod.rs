pub mod cognitive;
pub mod riasec;
pub mod vark;

use persona_core::models::item::{AssessmentItem, Dimension, Polarity};

pub(crate) fn dimension(code: &str, name: &str, description: &str) -> Dimension {
    Dimension {
        code: code.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
    }
}

/// Build items for one dimension; ids are `{prefix}{n}` starting at 1.
pub(crate) fn items_for(
    prefix: &str,
    dimension: &str,
    prompts: &[(&str, Polarity)],
) -> Vec<AssessmentItem> {
    prompts
        .iter()
        .enumerate()
        .map(|(i, (prompt, polarity))| AssessmentItem {
            id: format!("{prefix}{}", i + 1),
            dimension: dimension.to_string(),
            polarity: *polarity,
            prompt: prompt.to_string(),
        })
        .collect()
}
