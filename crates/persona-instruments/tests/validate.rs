use persona_core::models::item::{Dimension, LikertScale};
use persona_core::models::trial::TrialResult;
use persona_instruments::config::ValidationRules;
use persona_instruments::validate::{
    self, EXTREME_BIAS, IDENTICAL_RUN, LOW_DISPERSION, LOW_VARIETY, longest_run,
    relative_dispersion, validate_responses,
};

const SCALE: LikertScale = LikertScale::FIVE_POINT;

fn rules() -> ValidationRules {
    ValidationRules::default()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn empty_input_is_terminal() {
    let result = validate_responses(&[], SCALE, &rules());
    assert!(!result.is_valid);
    assert_eq!(result.issues, vec!["No responses provided".to_string()]);
    assert_eq!(result.consistency_score, 0.0);
    assert_eq!(result.confidence_level, 0.0);
}

#[test]
fn varied_answers_pass_every_rule() {
    let values = [1, 3, 5, 2, 4, 3, 2, 5, 1, 4];
    let result = validate_responses(&values, SCALE, &rules());
    assert!(result.is_valid);
    assert!(result.issues.is_empty());
    assert!(approx(result.consistency_score, 1.0));
    assert!(approx(result.confidence_level, 1.0));
}

#[test]
fn straight_lining_stacks_every_penalty_and_hits_floor() {
    let values = [5; 12];
    let result = validate_responses(&values, SCALE, &rules());

    assert!(!result.is_valid);
    assert_eq!(
        result.issues,
        vec![
            LOW_VARIETY.to_string(),
            EXTREME_BIAS.to_string(),
            IDENTICAL_RUN.to_string(),
            LOW_DISPERSION.to_string(),
        ]
    );
    assert!(approx(result.consistency_score, 0.2));
    assert!(approx(result.confidence_level, 0.3));
}

#[test]
fn alternating_extremes_flag_variety_and_bias_only() {
    let values = [1, 5, 1, 5, 1, 5, 1, 5];
    let result = validate_responses(&values, SCALE, &rules());

    assert_eq!(
        result.issues,
        vec![LOW_VARIETY.to_string(), EXTREME_BIAS.to_string()]
    );
    assert!(approx(result.consistency_score, 0.5));
    assert!(approx(result.confidence_level, 0.5));
}

#[test]
fn run_of_exactly_five_is_allowed() {
    let values = [3, 3, 3, 3, 3, 1, 2, 4, 5, 2];
    let result = validate_responses(&values, SCALE, &rules());
    assert!(!result.issues.contains(&IDENTICAL_RUN.to_string()));

    let values = [3, 3, 3, 3, 3, 3, 1, 2, 4, 5];
    let result = validate_responses(&values, SCALE, &rules());
    assert!(result.issues.contains(&IDENTICAL_RUN.to_string()));
}

#[test]
fn extreme_fraction_must_exceed_threshold() {
    // 8 of 10 at an endpoint is exactly 0.8, not above it.
    let values = [1, 5, 1, 5, 1, 5, 1, 5, 2, 3];
    let result = validate_responses(&values, SCALE, &rules());
    assert!(!result.issues.contains(&EXTREME_BIAS.to_string()));
}

#[test]
fn heavy_penalties_never_push_confidence_below_floor() {
    let harsh = ValidationRules {
        low_variety_penalty: 0.9,
        extreme_penalty: 0.9,
        identical_run_penalty: 0.9,
        dispersion_penalty: 0.9,
        ..ValidationRules::default()
    };
    let result = validate_responses(&[1; 20], SCALE, &harsh);
    assert_eq!(result.consistency_score, 0.0);
    assert!(approx(result.confidence_level, 0.3));
}

#[test]
fn run_and_dispersion_helpers() {
    assert_eq!(longest_run(&[]), 0);
    assert_eq!(longest_run(&[2]), 1);
    assert_eq!(longest_run(&[1, 1, 2, 2, 2, 1]), 3);

    assert_eq!(relative_dispersion(&[3, 3, 3], SCALE), 0.0);
    // std-dev of {1, 5} is 2, half width is 2.
    assert!(approx(relative_dispersion(&[1, 5], SCALE), 1.0));
}

fn dims() -> Vec<Dimension> {
    ["memory", "logic"]
        .iter()
        .map(|code| Dimension {
            code: code.to_string(),
            name: code.to_uppercase(),
            description: None,
        })
        .collect()
}

#[test]
fn trials_missing_a_dimension_are_flagged() {
    let trials = vec![TrialResult {
        dimension: "memory".to_string(),
        correct: true,
        response_time_ms: 900,
    }];
    let result = validate::validate_trials(&trials, &dims(), &rules());

    assert!(!result.is_valid);
    assert_eq!(result.issues, vec!["No trials were recorded for LOGIC.".to_string()]);
    assert!(approx(result.consistency_score, 0.75));
}

#[test]
fn no_trials_is_the_empty_case() {
    let result = validate::validate_trials(&[], &dims(), &rules());
    assert_eq!(result, persona_core::models::validation::ValidationResult::empty());
}
