//! persona-instruments
//!
//! Assessment definitions and the scoring pipeline. Pure computation, no
//! I/O beyond optional config files. Defines the dimensions, items, and
//! archetype tables for each supported assessment.

pub mod aggregate;
pub mod archetype;
pub mod classify;
pub mod config;
pub mod error;
pub mod instruments;
pub mod normalize;
pub mod scoring;
pub mod speed;
pub mod validate;

use persona_core::models::item::{AssessmentItem, Dimension, LikertScale};
use persona_core::models::report::AssessmentReport;
use persona_core::models::response::ResponseSet;

use archetype::{ArchetypeTable, ResolutionStrategy};
use config::ScoringConfig;
use error::InstrumentError;

/// Trait implemented by each Likert questionnaire.
pub trait Assessment: Send + Sync {
    /// Unique identifier for this assessment (e.g., "riasec", "vark").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Answer scale shared by every item.
    fn scale(&self) -> LikertScale {
        LikertScale::FIVE_POINT
    }

    /// Scored axes, in display order. Ranking ties keep this order.
    fn dimensions(&self) -> &[Dimension];

    /// Every question, tagged with its dimension and polarity.
    fn items(&self) -> &[AssessmentItem];

    /// Archetypes this assessment can resolve to, with its fallback.
    fn archetypes(&self) -> &ArchetypeTable;

    /// How scores are turned into an archetype key.
    fn strategy(&self) -> ResolutionStrategy;

    /// Score a response set with the default thresholds.
    fn score(&self, responses: &ResponseSet) -> Result<AssessmentReport, InstrumentError> {
        scoring::score_responses(self, responses, &ScoringConfig::default())
    }

    /// Score a response set with caller-supplied thresholds.
    fn score_with(
        &self,
        responses: &ResponseSet,
        config: &ScoringConfig,
    ) -> Result<AssessmentReport, InstrumentError> {
        scoring::score_responses(self, responses, config)
    }

    /// Format a report as structured text.
    fn to_structured_input(&self, report: &AssessmentReport) -> String {
        scoring::structured_summary(self.name(), self.dimensions(), report)
    }
}

/// Return all registered questionnaires.
pub fn all_assessments() -> Vec<Box<dyn Assessment>> {
    vec![
        Box::new(instruments::riasec::Riasec),
        Box::new(instruments::vark::Vark),
    ]
}

/// Look up a questionnaire by ID.
pub fn get_assessment(id: &str) -> Result<Box<dyn Assessment>, InstrumentError> {
    all_assessments()
        .into_iter()
        .find(|a| a.id() == id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
