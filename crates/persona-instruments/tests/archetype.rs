use persona_core::models::profile::{ProfileClassification, ProfileType};
use persona_core::models::scores::{RawScore, RawScores};
use persona_instruments::archetype::{
    ArchetypeTable, EXPLORER_KEY, MULTI_KEY, MULTIMODAL_KEY, ResolutionStrategy, ordered_pair_key,
    pair_code_key, resolve,
};
use persona_instruments::instruments::cognitive::CognitiveBattery;
use persona_instruments::instruments::riasec::Riasec;
use persona_instruments::instruments::vark::Vark;
use persona_instruments::Assessment;

fn raw(values: &[(&str, i32)]) -> RawScores {
    RawScores(
        values
            .iter()
            .map(|(d, s)| RawScore {
                dimension: d.to_string(),
                score: *s,
                item_count: 5,
            })
            .collect(),
    )
}

fn classification(primary: &str, secondary: Option<&str>, profile_type: ProfileType) -> ProfileClassification {
    ProfileClassification {
        primary_dimension: primary.to_string(),
        secondary_dimension: secondary.map(str::to_string),
        profile_type,
        score_range: 40,
        mean_score: 50.0,
    }
}

#[test]
fn top_three_tie_is_multi_regardless_of_which_dimensions() {
    let a = raw(&[("R", 8), ("I", 8), ("A", 8), ("S", 5), ("E", 5), ("C", 2)]);
    let b = raw(&[("R", 2), ("I", 5), ("A", 8), ("S", 5), ("E", 8), ("C", 8)]);
    assert_eq!(pair_code_key(&a), MULTI_KEY);
    assert_eq!(pair_code_key(&b), MULTI_KEY);
}

#[test]
fn four_way_lead_tie_is_still_multi() {
    let r = raw(&[("R", 8), ("I", 8), ("A", 8), ("S", 8), ("E", 5), ("C", 2)]);
    assert_eq!(pair_code_key(&r), MULTI_KEY);
}

#[test]
fn flat_profile_is_explorer_not_multi() {
    let r = raw(&[("R", 5), ("I", 5), ("A", 5), ("S", 5), ("E", 5), ("C", 5)]);
    assert_eq!(pair_code_key(&r), EXPLORER_KEY);
}

#[test]
fn top_two_codes_concatenate_in_rank_order() {
    let r = raw(&[("R", 10), ("I", 22), ("A", 7), ("S", 19), ("E", 3), ("C", 12)]);
    assert_eq!(pair_code_key(&r), "IS");
}

#[test]
fn two_way_tie_pairs_in_dimension_order() {
    let r = raw(&[("R", 10), ("I", 20), ("A", 20), ("S", 3), ("E", 3), ("C", 3)]);
    assert_eq!(pair_code_key(&r), "IA");
}

#[test]
fn riasec_table_covers_every_code_pair() {
    let table = Riasec.archetypes();
    let codes = ["R", "I", "A", "S", "E", "C"];
    for a in codes {
        for b in codes {
            if a != b {
                let key = format!("{a}{b}");
                assert!(table.get(&key).is_some(), "missing archetype {key}");
            }
        }
    }
    assert!(table.get(MULTI_KEY).is_some());
    assert!(table.get(EXPLORER_KEY).is_some());
    assert_eq!(table.len(), 32);
    assert!(!table.is_empty());
}

#[test]
fn missing_pair_code_falls_back() {
    let table = ArchetypeTable::new(
        vec![Riasec.archetypes().get("RI").unwrap().clone()],
        Riasec.archetypes().fallback().clone(),
    );
    let r = raw(&[("R", 5), ("I", 3), ("A", 20), ("S", 18), ("E", 1), ("C", 1)]);
    let c = classification("A", Some("S"), ProfileType::DualPreference);

    let archetype = resolve(&table, ResolutionStrategy::PairCode, &r, &c);
    assert_eq!(archetype.key, "GENERALIST");
}

#[test]
fn ordered_pairs_are_distinct() {
    let battery = CognitiveBattery;
    let table = battery.archetypes();
    let r = raw(&[]);

    let ab = resolve(table, ResolutionStrategy::OrderedPair, &r, &classification("logic", Some("memory"), ProfileType::DualPreference));
    let ba = resolve(table, ResolutionStrategy::OrderedPair, &r, &classification("memory", Some("logic"), ProfileType::DualPreference));

    assert_eq!(ab.key, ordered_pair_key("logic", "memory"));
    assert_eq!(ba.key, ordered_pair_key("memory", "logic"));
    assert_ne!(ab.name, ba.name);
    assert!(!ab.matches.is_empty());
}

#[test]
fn unknown_or_missing_pair_uses_balanced_fallback() {
    let table = CognitiveBattery.archetypes();
    let r = raw(&[]);

    let unknown = resolve(table, ResolutionStrategy::OrderedPair, &r, &classification("memory", Some("memory"), ProfileType::DualPreference));
    assert_eq!(unknown.key, "BALANCED");

    let no_secondary = resolve(table, ResolutionStrategy::OrderedPair, &r, &classification("memory", None, ProfileType::Specialized));
    assert_eq!(no_secondary.key, "BALANCED");
}

#[test]
fn dominant_strategy_uses_primary_or_multimodal_entry() {
    let table = Vark.archetypes();
    let r = raw(&[]);

    let k = resolve(table, ResolutionStrategy::Dominant, &r, &classification("K", Some("V"), ProfileType::Specialized));
    assert_eq!(k.key, "K");

    let multi = resolve(table, ResolutionStrategy::Dominant, &r, &classification("K", Some("V"), ProfileType::Multimodal));
    assert_eq!(multi.key, MULTIMODAL_KEY);
}

#[test]
fn match_lists_are_ranked_highest_first() {
    for table in [Riasec.archetypes(), Vark.archetypes(), CognitiveBattery.archetypes()] {
        for key in table.keys() {
            let archetype = table.get(key).unwrap();
            assert!(
                archetype.matches.windows(2).all(|w| w[0].match_percent >= w[1].match_percent),
                "{key} matches are not ranked"
            );
        }
    }
}
