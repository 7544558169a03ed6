use persona_core::models::item::Dimension;
use persona_core::models::report::AssessmentReport;
use persona_core::models::trial::{GameResult, TrialResult};

use super::dimension;
use crate::archetype::{ArchetypeTable, ResolutionStrategy, authored, ordered_pair_key};
use crate::config::ScoringConfig;
use crate::error::InstrumentError;
use crate::{scoring, speed, validate};

/// Timed cognitive battery: four mini-games, each scored on accuracy plus a
/// bounded speed bonus. Resolves by the ordered (primary, secondary) pair.
pub struct CognitiveBattery;

impl CognitiveBattery {
    pub fn id(&self) -> &str {
        "cognitive"
    }

    pub fn name(&self) -> &str {
        "Cognitive Strengths Profile"
    }

    pub fn dimensions(&self) -> &[Dimension] {
        static DIMENSIONS: std::sync::LazyLock<Vec<Dimension>> = std::sync::LazyLock::new(|| {
            vec![
                dimension("memory", "Memory", "Holding and recalling sequences"),
                dimension("logic", "Logic", "Deductive and numerical reasoning"),
                dimension("pattern", "Pattern Recognition", "Spotting visual and spatial regularities"),
                dimension("verbal", "Verbal Reasoning", "Word relationships and comprehension"),
            ]
        });
        &DIMENSIONS
    }

    pub fn archetypes(&self) -> &ArchetypeTable {
        &ARCHETYPES
    }

    pub fn strategy(&self) -> ResolutionStrategy {
        ResolutionStrategy::OrderedPair
    }

    /// Score raw trials with the default thresholds.
    pub fn score_trials(&self, trials: &[TrialResult]) -> Result<AssessmentReport, InstrumentError> {
        self.score_trials_with(trials, &ScoringConfig::default())
    }

    pub fn score_trials_with(
        &self,
        trials: &[TrialResult],
        config: &ScoringConfig,
    ) -> Result<AssessmentReport, InstrumentError> {
        let validation = validate::validate_trials(trials, self.dimensions(), &config.validation);
        let games = speed::summarize_trials(trials, self.dimensions());
        scoring::score_games(
            self.id(),
            &games,
            validation,
            self.archetypes(),
            self.strategy(),
            config,
        )
    }

    /// Score pre-summarized game results, e.g. from a client that only
    /// reports per-game accuracy and timing.
    pub fn score_games(
        &self,
        games: &[GameResult],
        config: &ScoringConfig,
    ) -> Result<AssessmentReport, InstrumentError> {
        let validation = validate::validate_coverage(
            games
                .iter()
                .filter(|g| g.total > 0)
                .map(|g| g.dimension.as_str()),
            self.dimensions(),
            &config.validation,
        );

        let ordered: Vec<GameResult> = self
            .dimensions()
            .iter()
            .map(|d| {
                games
                    .iter()
                    .find(|g| g.dimension == d.code)
                    .cloned()
                    .unwrap_or_else(|| GameResult {
                        dimension: d.code.clone(),
                        correct: 0,
                        total: 0,
                        avg_response_seconds: 0.0,
                    })
            })
            .collect();

        scoring::score_games(
            self.id(),
            &ordered,
            validation,
            self.archetypes(),
            self.strategy(),
            config,
        )
    }

    pub fn to_structured_input(&self, report: &AssessmentReport) -> String {
        scoring::structured_summary(self.name(), self.dimensions(), report)
    }
}

static ARCHETYPES: std::sync::LazyLock<ArchetypeTable> = std::sync::LazyLock::new(|| {
    let pair = |a: &str, b: &str| ordered_pair_key(a, b);
    let entries = vec![
        authored(&pair("memory", "logic"), "The Systematic Recaller", "Remembers the rules and applies them",
            "Strong recall backed by step-by-step reasoning.",
            &["Procedural memory", "Rule application"], &["Open-ended creative tasks"],
            &[("Pharmacist", 91), ("Air Traffic Controller", 88), ("Accountant", 84)]),
        authored(&pair("memory", "pattern"), "The Observer", "Nothing escapes notice",
            "Recalls detail and recognises when something has changed.",
            &["Visual memory", "Change detection"], &["Verbal argument"],
            &[("Radiologist", 90), ("Quality Inspector", 87), ("Cartographer", 83)]),
        authored(&pair("memory", "verbal"), "The Linguist", "Words stick",
            "Absorbs vocabulary and language structure quickly.",
            &["Vocabulary", "Recall of what was said"], &["Spatial puzzles"],
            &[("Interpreter", 93), ("Language Teacher", 88), ("Court Reporter", 84)]),
        authored(&pair("logic", "memory"), "The Analyst", "Reasoning grounded in facts",
            "Builds careful arguments from information held in mind.",
            &["Deduction", "Working memory"], &["Intuitive leaps"],
            &[("Data Analyst", 93), ("Auditor", 88), ("Software Tester", 85)]),
        authored(&pair("logic", "pattern"), "The Architect", "Structure from chaos",
            "Combines deduction with spatial insight to design systems.",
            &["Systems thinking", "Abstract reasoning"], &["Routine memorisation"],
            &[("Software Engineer", 94), ("Engineer", 90), ("Architect", 86)]),
        authored(&pair("logic", "verbal"), "The Debater", "Arguments that hold up",
            "Reasons precisely and expresses the reasoning clearly.",
            &["Argumentation", "Precise language"], &["Visual design"],
            &[("Lawyer", 93), ("Policy Analyst", 89), ("Philosopher", 84)]),
        authored(&pair("pattern", "memory"), "The Navigator", "Maps in the mind",
            "Recognises layouts and remembers how to move through them.",
            &["Spatial memory", "Orientation"], &["Long written work"],
            &[("Pilot", 91), ("Surveyor", 86), ("Logistics Planner", 84)]),
        authored(&pair("pattern", "logic"), "The Puzzle Solver", "Sees the rule behind the pattern",
            "Spots regularities quickly and reasons about why they hold.",
            &["Inductive reasoning", "Speed of insight"], &["Detailed documentation"],
            &[("Data Scientist", 93), ("Cryptanalyst", 90), ("Game Designer", 85)]),
        authored(&pair("pattern", "verbal"), "The Interpreter", "Reads between the lines",
            "Finds structure in language and meaning in visual signals.",
            &["Synthesis", "Metaphor"], &["Numerical drills"],
            &[("UX Designer", 90), ("Editor", 86), ("Marketing Strategist", 84)]),
        authored(&pair("verbal", "memory"), "The Storyteller", "Holds an audience",
            "Remembers detail and turns it into compelling narrative.",
            &["Narrative skill", "Recall"], &["Abstract mathematics"],
            &[("Journalist", 92), ("Teacher", 88), ("Historian", 85)]),
        authored(&pair("verbal", "logic"), "The Communicator", "Clear thinking, clearly said",
            "Explains complex reasoning in plain language.",
            &["Explanation", "Logical structure"], &["Spatial tasks"],
            &[("Technical Writer", 92), ("Consultant", 88), ("Lawyer", 86)]),
        authored(&pair("verbal", "pattern"), "The Creative Writer", "Language with vision",
            "Uses words to paint pictures and connect ideas.",
            &["Imagery", "Associative thinking"], &["Repetitive procedures"],
            &[("Copywriter", 91), ("Screenwriter", 87), ("Content Designer", 85)]),
    ];

    let fallback = authored("BALANCED", "The All-Rounder", "Balanced across the board",
        "Your cognitive strengths are evenly distributed across the games.",
        &["Versatility"], &["Developing a signature strength"],
        &[("Project Manager", 84), ("Operations Analyst", 82), ("Generalist Consultant", 80)]);

    ArchetypeTable::new(entries, fallback)
});
