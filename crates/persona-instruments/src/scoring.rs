//! The scoring pipeline: validate → aggregate → normalize → classify →
//! resolve. Pure and deterministic; the same inputs always give the same
//! report.

use persona_core::models::item::Dimension;
use persona_core::models::report::AssessmentReport;
use persona_core::models::response::ResponseSet;
use persona_core::models::scores::{DimensionScore, NormalizedScores, RawScore, RawScores};
use persona_core::models::trial::GameResult;
use persona_core::models::validation::ValidationResult;
use tracing::debug;

use crate::Assessment;
use crate::archetype::{self, ArchetypeTable, ResolutionStrategy};
use crate::classify::classify;
use crate::config::ScoringConfig;
use crate::error::InstrumentError;
use crate::speed::game_score;
use crate::{aggregate, normalize, validate};

/// Score a questionnaire's responses.
pub fn score_responses<A: Assessment + ?Sized>(
    assessment: &A,
    responses: &ResponseSet,
    config: &ScoringConfig,
) -> Result<AssessmentReport, InstrumentError> {
    let scale = assessment.scale();

    let validation = validate::validate_responses(&responses.values(), scale, &config.validation);
    let raw_scores = aggregate::aggregate(
        responses,
        assessment.items(),
        assessment.dimensions(),
        scale,
    );
    let normalized_scores = normalize::normalize(&raw_scores, scale);

    debug!(
        instrument = assessment.id(),
        responses = responses.len(),
        valid = validation.is_valid,
        confidence = validation.confidence_level,
        "responses scored"
    );

    build_report(
        assessment.id(),
        validation,
        raw_scores,
        normalized_scores,
        assessment.archetypes(),
        assessment.strategy(),
        config,
    )
}

/// Score speed-adjusted game results. Each game's final score is already on
/// 0–100, so it is both the raw and the normalized score.
pub fn score_games(
    instrument_id: &str,
    games: &[GameResult],
    validation: ValidationResult,
    archetypes: &ArchetypeTable,
    strategy: ResolutionStrategy,
    config: &ScoringConfig,
) -> Result<AssessmentReport, InstrumentError> {
    let finals: Vec<(String, u32, u32)> = games
        .iter()
        .map(|g| (g.dimension.clone(), game_score(g), g.total))
        .collect();

    let raw_scores = RawScores(
        finals
            .iter()
            .map(|(dimension, score, total)| RawScore {
                dimension: dimension.clone(),
                score: *score as i32,
                item_count: *total,
            })
            .collect(),
    );
    let normalized_scores: NormalizedScores = finals
        .into_iter()
        .map(|(dimension, score, _)| DimensionScore::new(dimension, score))
        .collect();

    debug!(
        instrument = instrument_id,
        games = games.len(),
        valid = validation.is_valid,
        "games scored"
    );

    build_report(
        instrument_id,
        validation,
        raw_scores,
        normalized_scores,
        archetypes,
        strategy,
        config,
    )
}

fn build_report(
    instrument_id: &str,
    validation: ValidationResult,
    raw_scores: RawScores,
    normalized_scores: NormalizedScores,
    archetypes: &ArchetypeTable,
    strategy: ResolutionStrategy,
    config: &ScoringConfig,
) -> Result<AssessmentReport, InstrumentError> {
    let classification = classify(&normalized_scores, &config.thresholds)?;
    let archetype = archetype::resolve(archetypes, strategy, &raw_scores, &classification).clone();

    debug!(
        instrument = instrument_id,
        profile = %classification.profile_type,
        primary = %classification.primary_dimension,
        archetype = %archetype.key,
        "profile classified"
    );

    Ok(AssessmentReport {
        instrument_id: instrument_id.to_string(),
        validation,
        raw_scores,
        normalized_scores,
        classification,
        archetype,
    })
}

/// Format a report as structured text, e.g. for an LLM prompt or a
/// plain-text export.
pub fn structured_summary(name: &str, dimensions: &[Dimension], report: &AssessmentReport) -> String {
    let mut output = format!("## {name}\n\n### Scores\n");
    for dimension in dimensions {
        if let Some(score) = report.normalized_scores.get(&dimension.code) {
            output.push_str(&format!("- {}: {}\n", dimension.name, score));
        }
    }

    let classification = &report.classification;
    output.push_str("\n### Profile\n");
    output.push_str(&format!("- Type: {}\n", classification.profile_type));
    output.push_str(&format!(
        "- Primary: {}\n",
        dimension_name(dimensions, &classification.primary_dimension)
    ));
    if let Some(secondary) = &classification.secondary_dimension {
        output.push_str(&format!(
            "- Secondary: {}\n",
            dimension_name(dimensions, secondary)
        ));
    }
    output.push_str(&format!("- Range: {}\n", classification.score_range));
    output.push_str(&format!("- Archetype: {}\n", report.archetype.name));
    output.push_str(&format!(
        "- Confidence: {:.2}\n",
        report.validation.confidence_level
    ));
    for issue in &report.validation.issues {
        output.push_str(&format!("- Warning: {issue}\n"));
    }
    output
}

/// Display name for a dimension code, or the code itself when unknown.
pub fn dimension_name<'a>(dimensions: &'a [Dimension], code: &'a str) -> &'a str {
    dimensions
        .iter()
        .find(|d| d.code == code)
        .map_or(code, |d| d.name.as_str())
}
