//! Archetype tables and the rules that pick an entry from them.

use std::collections::BTreeMap;

use persona_core::models::archetype::{Archetype, OutcomeMatch};
use persona_core::models::profile::{ProfileClassification, ProfileType};
use persona_core::models::scores::RawScores;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Three or more leading dimensions tied, but not all of them.
pub const MULTI_KEY: &str = "MULTI";
/// Every dimension tied.
pub const EXPLORER_KEY: &str = "EXPLORER";
/// Entry used for a multimodal profile under [`ResolutionStrategy::Dominant`].
pub const MULTIMODAL_KEY: &str = "MULTIMODAL";

/// How an instrument turns scores into a table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResolutionStrategy {
    /// Codes of the top two raw scores concatenated ("RI"), with tie
    /// sentinels for degenerate rankings.
    PairCode,
    /// Ordered (primary, secondary) pair from the classification.
    OrderedPair,
    /// The primary dimension alone; multimodal profiles get their own entry.
    Dominant,
}

/// Immutable lookup of archetypes by key, plus the entry returned when a
/// key has no authored archetype.
#[derive(Debug, Clone)]
pub struct ArchetypeTable {
    entries: BTreeMap<String, Archetype>,
    fallback: Archetype,
}

impl ArchetypeTable {
    pub fn new(entries: Vec<Archetype>, fallback: Archetype) -> Self {
        Self {
            entries: entries.into_iter().map(|a| (a.key.clone(), a)).collect(),
            fallback,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Archetype> {
        self.entries.get(key)
    }

    pub fn fallback(&self) -> &Archetype {
        &self.fallback
    }

    /// Look up `key`, falling back to the default archetype when absent.
    pub fn get_or_fallback(&self, key: &str) -> &Archetype {
        match self.entries.get(key) {
            Some(archetype) => archetype,
            None => {
                tracing::warn!(key, fallback = %self.fallback.key, "no archetype for key, using fallback");
                &self.fallback
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Resolve the archetype for a scored profile.
pub fn resolve<'a>(
    table: &'a ArchetypeTable,
    strategy: ResolutionStrategy,
    raw: &RawScores,
    classification: &ProfileClassification,
) -> &'a Archetype {
    let key = match strategy {
        ResolutionStrategy::PairCode => pair_code_key(raw),
        ResolutionStrategy::OrderedPair => match &classification.secondary_dimension {
            Some(secondary) => ordered_pair_key(&classification.primary_dimension, secondary),
            None => return table.fallback(),
        },
        ResolutionStrategy::Dominant => {
            if classification.profile_type == ProfileType::Multimodal {
                MULTIMODAL_KEY.to_string()
            } else {
                classification.primary_dimension.clone()
            }
        }
    };
    table.get_or_fallback(&key)
}

/// Key for the top two raw scores, or a tie sentinel.
///
/// The sentinel checks run before pairing, MULTI first: three or more tied
/// leaders (when not every score is equal) give [`MULTI_KEY`], a completely
/// flat ranking gives [`EXPLORER_KEY`].
pub fn pair_code_key(raw: &RawScores) -> String {
    let mut ranked: Vec<_> = raw.iter().collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    let all_equal = ranked.windows(2).all(|w| w[0].score == w[1].score);
    let top_three_equal =
        ranked.len() >= 3 && ranked[0].score == ranked[1].score && ranked[1].score == ranked[2].score;

    if top_three_equal && !all_equal {
        return MULTI_KEY.to_string();
    }
    if all_equal {
        return EXPLORER_KEY.to_string();
    }
    ranked
        .iter()
        .take(2)
        .map(|s| s.dimension.as_str())
        .collect()
}

pub fn ordered_pair_key(primary: &str, secondary: &str) -> String {
    format!("{primary}+{secondary}")
}

/// Build an archetype from static strings.
pub(crate) fn authored(
    key: &str,
    name: &str,
    tagline: &str,
    description: &str,
    strengths: &[&str],
    growth_areas: &[&str],
    matches: &[(&str, u32)],
) -> Archetype {
    Archetype {
        key: key.to_string(),
        name: name.to_string(),
        tagline: tagline.to_string(),
        description: description.to_string(),
        strengths: strengths.iter().map(|s| s.to_string()).collect(),
        growth_areas: growth_areas.iter().map(|s| s.to_string()).collect(),
        matches: matches
            .iter()
            .map(|(title, match_percent)| OutcomeMatch {
                title: title.to_string(),
                match_percent: *match_percent,
            })
            .collect(),
    }
}
