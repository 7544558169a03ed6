use std::collections::HashMap;

use persona_core::models::profile::ProfileType;
use serde::{Deserialize, Serialize};

/// Templates for one profile type. Next-step lines that render to blank
/// text are dropped, so a line can be wrapped in `{% if %}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightTemplates {
    pub headline: String,
    pub summary: String,
    pub next_steps: Vec<String>,
}

/// Insight templates keyed by profile type. Shared by every assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSet {
    entries: HashMap<ProfileType, InsightTemplates>,
}

impl TemplateSet {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn with(mut self, profile_type: ProfileType, templates: InsightTemplates) -> Self {
        self.entries.insert(profile_type, templates);
        self
    }

    pub fn get(&self, profile_type: ProfileType) -> Option<&InsightTemplates> {
        self.entries.get(&profile_type)
    }
}

const MATCH_LIST: &str = r#"{{ archetype.matches | map(attribute="title") | join(sep=", ") }}"#;

const RETAKE: &str = "{% if low_confidence %}Some answers looked rushed or repetitive; retaking the assessment may give a clearer picture.{% endif %}";

impl Default for TemplateSet {
    fn default() -> Self {
        let steps = |first: &str| {
            vec![
                first.to_string(),
                format!("Look into: {MATCH_LIST}."),
                RETAKE.to_string(),
            ]
        };

        TemplateSet::empty()
            .with(
                ProfileType::Multimodal,
                InsightTemplates {
                    headline: "{{ archetype.name }}: a balanced profile".to_string(),
                    summary: "Your scores sit within {{ score_range }} points of each other, so no single area dominates. {{ archetype.description }}".to_string(),
                    next_steps: steps("Try short projects in a few different areas and notice which ones hold your attention."),
                },
            )
            .with(
                ProfileType::DualPreference,
                InsightTemplates {
                    headline: "{{ archetype.name }}: {{ primary.name }}{% if secondary %} and {{ secondary.name }}{% endif %}".to_string(),
                    summary: "{{ primary.name }} ({{ primary.score }}){% if secondary %} and {{ secondary.name }} ({{ secondary.score }}){% endif %} are close together at the top of your profile. {{ archetype.description }}".to_string(),
                    next_steps: steps("Look for options that use both of your leading strengths rather than choosing one."),
                },
            )
            .with(
                ProfileType::Specialized,
                InsightTemplates {
                    headline: "{{ archetype.name }}: strongly {{ primary.name }}".to_string(),
                    summary: "{{ primary.name }} stands out with a score of {{ primary.score }}. {{ archetype.description }}".to_string(),
                    next_steps: steps("Build depth in {{ primary.name | lower }}; it is a clear strength."),
                },
            )
            .with(
                ProfileType::SingleDominant,
                InsightTemplates {
                    headline: "{{ archetype.name }}: led by {{ primary.name }}".to_string(),
                    summary: "{{ primary.name }} leads your profile at {{ primary.score }}{% if secondary %}, ahead of {{ secondary.name }} at {{ secondary.score }}{% endif %}. {{ archetype.description }}".to_string(),
                    next_steps: steps("Start with {{ primary.name | lower }} and use your other areas to round it out."),
                },
            )
    }
}
