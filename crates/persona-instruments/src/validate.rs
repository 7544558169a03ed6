//! Response-quality checks.
//!
//! Every rule is independent: a triggered rule appends its warning and
//! subtracts its penalty. The result is a trust signal, never an error.

use std::collections::BTreeSet;

use persona_core::models::item::{Dimension, LikertScale};
use persona_core::models::trial::TrialResult;
use persona_core::models::validation::ValidationResult;

use crate::config::ValidationRules;

pub const LOW_VARIETY: &str =
    "Your responses show very little variation. Consider each question individually.";
pub const EXTREME_BIAS: &str =
    "You used mostly extreme responses (strongly agree or strongly disagree).";
pub const IDENTICAL_RUN: &str = "Many consecutive identical responses were detected.";
pub const LOW_DISPERSION: &str =
    "There is very little variation across different question types.";

/// Check a Likert answer sequence for low-information patterns.
pub fn validate_responses(
    values: &[i32],
    scale: LikertScale,
    rules: &ValidationRules,
) -> ValidationResult {
    if values.is_empty() {
        return ValidationResult::empty();
    }

    let mut issues = Vec::new();
    let mut consistency = 1.0_f64;

    let distinct: BTreeSet<i32> = values.iter().copied().collect();
    if distinct.len() <= rules.low_variety_max_distinct {
        issues.push(LOW_VARIETY.to_string());
        consistency -= rules.low_variety_penalty;
    }

    let extreme = values.iter().filter(|v| scale.is_extreme(**v)).count();
    if extreme as f64 / values.len() as f64 > rules.extreme_fraction {
        issues.push(EXTREME_BIAS.to_string());
        consistency -= rules.extreme_penalty;
    }

    if longest_run(values) > rules.max_identical_run {
        issues.push(IDENTICAL_RUN.to_string());
        consistency -= rules.identical_run_penalty;
    }

    if relative_dispersion(values, scale) < rules.min_dispersion {
        issues.push(LOW_DISPERSION.to_string());
        consistency -= rules.dispersion_penalty;
    }

    finish(issues, consistency, rules)
}

/// Check that a timed battery has trials for every dimension.
pub fn validate_trials(
    trials: &[TrialResult],
    dimensions: &[Dimension],
    rules: &ValidationRules,
) -> ValidationResult {
    validate_coverage(trials.iter().map(|t| t.dimension.as_str()), dimensions, rules)
}

/// Coverage check over the dimensions that were actually played. No
/// played dimensions at all is the empty case.
pub fn validate_coverage<'a>(
    played: impl IntoIterator<Item = &'a str>,
    dimensions: &[Dimension],
    rules: &ValidationRules,
) -> ValidationResult {
    let played: BTreeSet<&str> = played.into_iter().collect();
    if played.is_empty() {
        return ValidationResult::empty();
    }

    let mut issues = Vec::new();
    let mut consistency = 1.0_f64;
    for dimension in dimensions {
        if !played.contains(dimension.code.as_str()) {
            issues.push(format!("No trials were recorded for {}.", dimension.name));
            consistency -= rules.missing_dimension_penalty;
        }
    }

    finish(issues, consistency, rules)
}

fn finish(issues: Vec<String>, consistency: f64, rules: &ValidationRules) -> ValidationResult {
    let consistency_score = consistency.max(0.0);
    ValidationResult {
        is_valid: issues.is_empty(),
        issues,
        consistency_score,
        confidence_level: consistency_score.max(rules.confidence_floor),
    }
}

/// Length of the longest stretch of consecutive equal values.
pub fn longest_run(values: &[i32]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous = None;
    for value in values {
        if previous == Some(value) {
            current += 1;
        } else {
            current = 1;
            previous = Some(value);
        }
        longest = longest.max(current);
    }
    longest
}

/// Population std-dev divided by half the scale width, capped at 1.0.
pub fn relative_dispersion(values: &[i32], scale: LikertScale) -> f64 {
    let half_width = scale.half_width();
    if values.is_empty() || half_width <= 0.0 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().map(|v| f64::from(*v)).sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|v| (f64::from(*v) - mean).powi(2))
        .sum::<f64>()
        / n;
    (variance.sqrt() / half_width).min(1.0)
}
