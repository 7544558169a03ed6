use persona_core::models::archetype::Archetype;
use persona_core::models::item::Dimension;
use persona_core::models::report::{AssessmentReport, Insights};
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;
use crate::templates::TemplateSet;

/// Below this confidence the retake hint is shown.
pub const LOW_CONFIDENCE: f64 = 0.6;

#[derive(Debug, Serialize)]
struct ScoreView {
    code: String,
    name: String,
    score: u32,
}

/// Template context. Every field is addressable by name in a template.
#[derive(Debug, Serialize)]
struct InsightContext<'a> {
    instrument_id: &'a str,
    profile_type: String,
    score_range: u32,
    mean_score: f64,
    confidence: f64,
    low_confidence: bool,
    issues: &'a [String],
    primary: ScoreView,
    secondary: Option<ScoreView>,
    scores: Vec<ScoreView>,
    archetype: &'a Archetype,
}

/// Render insight text for a report using the templates for its profile type.
pub fn render_insights(
    report: &AssessmentReport,
    dimensions: &[Dimension],
    templates: &TemplateSet,
) -> Result<Insights, ExportError> {
    let profile_type = report.classification.profile_type;
    let set = templates
        .get(profile_type)
        .ok_or_else(|| ExportError::TemplateNotFound(profile_type.to_string()))?;

    let mut tera = Tera::default();
    tera.add_raw_template("headline", &set.headline)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
    tera.add_raw_template("summary", &set.summary)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
    for (i, step) in set.next_steps.iter().enumerate() {
        tera.add_raw_template(&format!("step_{i}"), step)
            .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
    }

    // Convert the context to a Tera context via serde_json
    let value = serde_json::to_value(context(report, dimensions))?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let headline = tera.render("headline", &context)?;
    let summary = tera.render("summary", &context)?;
    let mut next_steps = Vec::new();
    for i in 0..set.next_steps.len() {
        let line = tera.render(&format!("step_{i}"), &context)?;
        let line = line.trim();
        if !line.is_empty() {
            next_steps.push(line.to_string());
        }
    }

    tracing::debug!(
        instrument = %report.instrument_id,
        profile = %profile_type,
        steps = next_steps.len(),
        "insights rendered"
    );

    Ok(Insights {
        headline: headline.trim().to_string(),
        summary: summary.trim().to_string(),
        next_steps,
    })
}

fn context<'a>(report: &'a AssessmentReport, dimensions: &[Dimension]) -> InsightContext<'a> {
    let view = |code: &str| ScoreView {
        code: code.to_string(),
        name: dimensions
            .iter()
            .find(|d| d.code == code)
            .map_or_else(|| code.to_string(), |d| d.name.clone()),
        score: report.normalized_scores.get(code).unwrap_or(0),
    };

    let classification = &report.classification;
    InsightContext {
        instrument_id: &report.instrument_id,
        profile_type: classification.profile_type.to_string(),
        score_range: classification.score_range,
        mean_score: classification.mean_score,
        confidence: report.validation.confidence_level,
        low_confidence: report.validation.confidence_level < LOW_CONFIDENCE,
        issues: &report.validation.issues,
        primary: view(&classification.primary_dimension),
        secondary: classification.secondary_dimension.as_deref().map(view),
        scores: report
            .normalized_scores
            .iter()
            .map(|s| view(&s.dimension))
            .collect(),
        archetype: &report.archetype,
    }
}
