use persona_core::models::profile::ProfileType;
use persona_core::models::scores::{DimensionScore, NormalizedScores};
use persona_instruments::classify::classify;
use persona_instruments::config::ClassificationThresholds;
use persona_instruments::error::InstrumentError;

fn scores(values: &[(&str, u32)]) -> NormalizedScores {
    values
        .iter()
        .map(|(d, s)| DimensionScore::new(*d, *s))
        .collect()
}

fn run(values: &[(&str, u32)]) -> persona_core::models::profile::ProfileClassification {
    classify(&scores(values), &ClassificationThresholds::default()).unwrap()
}

#[test]
fn close_leaders_are_dual_preference() {
    let c = run(&[("A", 88), ("B", 85), ("C", 25), ("D", 13)]);
    assert_eq!(c.profile_type, ProfileType::DualPreference);
    assert_eq!(c.primary_dimension, "A");
    assert_eq!(c.secondary_dimension.as_deref(), Some("B"));
    assert_eq!(c.score_range, 75);
    assert!((c.mean_score - 52.75).abs() < 1e-9);
}

#[test]
fn dual_gap_beats_high_top_score() {
    let c = run(&[("A", 85), ("B", 83), ("C", 10)]);
    assert_eq!(c.profile_type, ProfileType::DualPreference);
}

#[test]
fn range_of_twenty_is_multimodal() {
    let c = run(&[("A", 70), ("B", 50), ("C", 55), ("D", 60)]);
    assert_eq!(c.profile_type, ProfileType::Multimodal);
    assert_eq!(c.score_range, 20);
    assert_eq!(c.secondary_dimension.as_deref(), Some("D"));
}

#[test]
fn range_of_twenty_one_with_wide_gap_is_single_dominant() {
    let c = run(&[("A", 60), ("B", 44), ("C", 39)]);
    assert_eq!(c.score_range, 21);
    assert_eq!(c.profile_type, ProfileType::SingleDominant);
}

#[test]
fn strong_lone_leader_is_specialized() {
    let c = run(&[("A", 80), ("B", 40), ("C", 30)]);
    assert_eq!(c.profile_type, ProfileType::Specialized);
    assert_eq!(c.primary_dimension, "A");
}

#[test]
fn ties_keep_dimension_order() {
    let c = run(&[("X", 50), ("Y", 90), ("Z", 90)]);
    assert_eq!(c.primary_dimension, "Y");
    assert_eq!(c.secondary_dimension.as_deref(), Some("Z"));
}

#[test]
fn all_zero_scores_still_classify() {
    let c = run(&[("A", 0), ("B", 0)]);
    assert_eq!(c.profile_type, ProfileType::Multimodal);
    assert_eq!(c.primary_dimension, "A");
    assert_eq!(c.mean_score, 0.0);
}

#[test]
fn single_dimension_is_rejected() {
    let err = classify(&scores(&[("A", 50)]), &ClassificationThresholds::default()).unwrap_err();
    assert!(matches!(err, InstrumentError::TooFewDimensions { count: 1 }));
}

#[test]
fn custom_thresholds_shift_the_boundaries() {
    let thresholds = ClassificationThresholds {
        balanced_range: 5,
        dual_gap: 2,
        specialized_min: 95,
    };
    let c = classify(&scores(&[("A", 85), ("B", 80), ("C", 10)]), &thresholds).unwrap();
    assert_eq!(c.profile_type, ProfileType::SingleDominant);
}
