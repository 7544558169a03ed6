//! Tunable thresholds for classification and response validation.
//!
//! Configs are versioned JSON. Loading parses raw JSON first so that older
//! shapes can be migrated before deserializing.

use std::path::Path;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub thresholds: ClassificationThresholds,
    #[serde(default)]
    pub validation: ValidationRules,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            thresholds: ClassificationThresholds::default(),
            validation: ValidationRules::default(),
        }
    }
}

/// Cut-offs for the profile shape. Compared against 0–100 scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ClassificationThresholds {
    /// A max-minus-min spread at or below this is multimodal.
    pub balanced_range: u32,
    /// A top-two gap at or below this is a dual preference.
    pub dual_gap: u32,
    /// A top score at or above this is specialized.
    pub specialized_min: u32,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            balanced_range: 20,
            dual_gap: 15,
            specialized_min: 80,
        }
    }
}

/// Response-quality rules. Each triggered rule subtracts its penalty from
/// a starting consistency of 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ValidationRules {
    pub low_variety_max_distinct: usize,
    pub low_variety_penalty: f64,
    /// Share of answers at either scale endpoint above which bias is flagged.
    pub extreme_fraction: f64,
    pub extreme_penalty: f64,
    pub max_identical_run: usize,
    pub identical_run_penalty: f64,
    /// Minimum std-dev relative to half the scale width.
    pub min_dispersion: f64,
    pub dispersion_penalty: f64,
    /// Trial-based batteries: penalty per dimension with no trials.
    pub missing_dimension_penalty: f64,
    pub confidence_floor: f64,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            low_variety_max_distinct: 2,
            low_variety_penalty: 0.3,
            extreme_fraction: 0.8,
            extreme_penalty: 0.2,
            max_identical_run: 5,
            identical_run_penalty: 0.2,
            min_dispersion: 0.3,
            dispersion_penalty: 0.1,
            missing_dimension_penalty: 0.25,
            confidence_floor: 0.3,
        }
    }
}

/// Parse a config from JSON text, migrating older versions.
pub fn parse_config(contents: &str) -> Result<ScoringConfig, InstrumentError> {
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: ScoringConfig = serde_json::from_value(migrated)?;
    check(&config)?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<ScoringConfig, InstrumentError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        InstrumentError::Config(format!("failed to read config at {}: {e}", path.display()))
    })?;
    parse_config(&contents)
}

pub fn save_config(path: &Path, config: &ScoringConfig) -> Result<(), InstrumentError> {
    check(config)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "scoring config saved");
    Ok(())
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(
    mut json: serde_json::Value,
    from_version: u32,
) -> Result<serde_json::Value, InstrumentError> {
    if from_version > CURRENT_VERSION {
        return Err(InstrumentError::UnsupportedConfigVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: thresholds moved from the top level into `thresholds`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| InstrumentError::Config("config is not a JSON object".to_string()))?;

        let mut thresholds = serde_json::Map::new();
        for key in ["balanced_range", "dual_gap", "specialized_min"] {
            if let Some(value) = obj.remove(key) {
                thresholds.insert(key.to_string(), value);
            }
        }
        if !thresholds.is_empty() {
            obj.entry("thresholds")
                .or_insert(serde_json::Value::Object(serde_json::Map::new()));
            if let Some(nested) = obj.get_mut("thresholds").and_then(|t| t.as_object_mut()) {
                for (key, value) in thresholds {
                    nested.entry(key).or_insert(value);
                }
            }
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated scoring config v0 → v1 (nested thresholds)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

fn check(config: &ScoringConfig) -> Result<(), InstrumentError> {
    let rules = &config.validation;
    let fractions = [
        ("extreme_fraction", rules.extreme_fraction),
        ("confidence_floor", rules.confidence_floor),
    ];
    for (name, value) in fractions {
        if !(0.0..=1.0).contains(&value) {
            return Err(InstrumentError::Config(format!(
                "{name} must be within [0, 1], got {value}"
            )));
        }
    }
    let penalties = [
        rules.low_variety_penalty,
        rules.extreme_penalty,
        rules.identical_run_penalty,
        rules.dispersion_penalty,
        rules.missing_dimension_penalty,
    ];
    if penalties.iter().any(|p| !p.is_finite() || *p < 0.0) {
        return Err(InstrumentError::Config(
            "validation penalties must be non-negative".to_string(),
        ));
    }
    if config.thresholds.specialized_min > 100 {
        return Err(InstrumentError::Config(format!(
            "specialized_min must be at most 100, got {}",
            config.thresholds.specialized_min
        )));
    }
    Ok(())
}
