use persona_instruments::config::{
    CURRENT_VERSION, ClassificationThresholds, ScoringConfig, load_config, parse_config,
    save_config,
};
use persona_instruments::error::InstrumentError;

#[test]
fn empty_object_gives_defaults() {
    let config = parse_config("{}").unwrap();
    assert_eq!(config.config_version, CURRENT_VERSION);
    assert_eq!(config.thresholds, ClassificationThresholds::default());
    assert_eq!(config.validation.confidence_floor, 0.3);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = parse_config(
        r#"{"config_version": 1, "thresholds": {"dual_gap": 10}, "validation": {"max_identical_run": 8}}"#,
    )
    .unwrap();
    assert_eq!(config.thresholds.dual_gap, 10);
    assert_eq!(config.thresholds.balanced_range, 20);
    assert_eq!(config.validation.max_identical_run, 8);
    assert_eq!(config.validation.low_variety_penalty, 0.3);
}

#[test]
fn v0_flat_thresholds_are_migrated() {
    let config = parse_config(r#"{"balanced_range": 25, "specialized_min": 90}"#).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.thresholds.balanced_range, 25);
    assert_eq!(config.thresholds.specialized_min, 90);
    assert_eq!(config.thresholds.dual_gap, 15);
}

#[test]
fn newer_version_is_rejected() {
    let err = parse_config(r#"{"config_version": 99}"#).unwrap_err();
    assert!(matches!(
        err,
        InstrumentError::UnsupportedConfigVersion { found: 99, supported: CURRENT_VERSION }
    ));
}

#[test]
fn non_object_is_rejected() {
    assert!(matches!(parse_config("[1, 2]"), Err(InstrumentError::Config(_))));
    assert!(matches!(parse_config("not json"), Err(InstrumentError::Serialization(_))));
}

#[test]
fn out_of_range_rules_are_rejected() {
    let err = parse_config(r#"{"config_version": 1, "validation": {"confidence_floor": 1.5}}"#)
        .unwrap_err();
    assert!(err.to_string().contains("confidence_floor"));

    let err = parse_config(r#"{"config_version": 1, "validation": {"extreme_penalty": -0.1}}"#)
        .unwrap_err();
    assert!(matches!(err, InstrumentError::Config(_)));
}

#[test]
fn save_then_load_stamps_current_version() {
    let dir = std::env::temp_dir().join(format!("persona-config-{}", std::process::id()));
    let path = dir.join("scoring.json");

    let mut config = ScoringConfig::default();
    config.config_version = 0;
    config.thresholds.dual_gap = 12;
    save_config(&path, &config).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.thresholds.dual_gap, 12);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_file_is_a_config_error() {
    let err = load_config(std::path::Path::new("/nonexistent/persona/scoring.json")).unwrap_err();
    assert!(matches!(err, InstrumentError::Config(_)));
}
