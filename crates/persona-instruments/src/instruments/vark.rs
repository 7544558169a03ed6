use persona_core::models::item::{AssessmentItem, Dimension, Polarity};

use super::{dimension, items_for};
use crate::Assessment;
use crate::archetype::{ArchetypeTable, MULTIMODAL_KEY, ResolutionStrategy, authored};

use Polarity::{Negative, Positive};

/// VARK learning-style questionnaire.
/// Visual, Aural, Read/Write, Kinesthetic; six items each, rated 1–5.
pub struct Vark;

impl Assessment for Vark {
    fn id(&self) -> &str {
        "vark"
    }

    fn name(&self) -> &str {
        "Learning Style Profile"
    }

    fn dimensions(&self) -> &[Dimension] {
        static DIMENSIONS: std::sync::LazyLock<Vec<Dimension>> = std::sync::LazyLock::new(|| {
            vec![
                dimension("V", "Visual", "Diagrams, charts, maps, and spatial layout"),
                dimension("A", "Aural", "Listening, discussion, and talking things through"),
                dimension("R", "Read/Write", "Lists, notes, and the written word"),
                dimension("K", "Kinesthetic", "Practice, examples, and real experience"),
            ]
        });
        &DIMENSIONS
    }

    fn items(&self) -> &[AssessmentItem] {
        static ITEMS: std::sync::LazyLock<Vec<AssessmentItem>> = std::sync::LazyLock::new(|| {
            let mut items = Vec::new();
            items.extend(items_for("v", "V", &[
                ("A diagram helps me more than a paragraph of text.", Positive),
                ("I remember faces better than names.", Positive),
                ("I use colours or highlighting to organise notes.", Positive),
                ("Charts and graphs usually confuse me.", Negative),
                ("I picture a route in my head before going somewhere new.", Positive),
                ("I like slides with images rather than bullet points.", Positive),
            ]));
            items.extend(items_for("a", "A", &[
                ("I learn well from lectures and podcasts.", Positive),
                ("Talking a problem through helps me solve it.", Positive),
                ("I remember what people said better than what I read.", Positive),
                ("Group discussions rarely help me understand things.", Negative),
                ("I read things aloud to understand them.", Positive),
                ("I prefer spoken directions over a written map.", Positive),
            ]));
            items.extend(items_for("r", "R", &[
                ("I take detailed written notes.", Positive),
                ("I prefer a manual or written instructions.", Positive),
                ("I rewrite my notes to learn them.", Positive),
                ("Long reading assignments put me off.", Negative),
                ("I like making lists to organise my thoughts.", Positive),
                ("I learn a lot from textbooks and articles.", Positive),
            ]));
            items.extend(items_for("k", "K", &[
                ("I learn best by trying things myself.", Positive),
                ("Real-world examples make ideas click for me.", Positive),
                ("I find it hard to sit still while studying.", Positive),
                ("I would rather read about a skill than practise it.", Negative),
                ("I remember things I have done better than things I was told.", Positive),
                ("Labs, field trips, and simulations help me learn.", Positive),
            ]));
            items
        });
        &ITEMS
    }

    fn archetypes(&self) -> &ArchetypeTable {
        &ARCHETYPES
    }

    fn strategy(&self) -> ResolutionStrategy {
        ResolutionStrategy::Dominant
    }
}

static ARCHETYPES: std::sync::LazyLock<ArchetypeTable> = std::sync::LazyLock::new(|| {
    let entries = vec![
        authored("V", "The Visualiser", "See it to understand it",
            "You learn fastest when information has a shape: maps, diagrams, and colour-coded notes.",
            &["Spatial reasoning", "Seeing patterns at a glance"], &["Learning from audio-only material"],
            &[("Mind maps", 95), ("Annotated diagrams", 90), ("Video walkthroughs", 84)]),
        authored("A", "The Listener", "Hear it, say it, know it",
            "You learn through conversation, explanation, and repetition out loud.",
            &["Verbal memory", "Learning through discussion"], &["Silent self-study"],
            &[("Study groups", 94), ("Recorded lectures", 89), ("Teach-back sessions", 86)]),
        authored("R", "The Reader", "The written word is your tool",
            "You learn by reading, writing, and reorganising text.",
            &["Note taking", "Precise recall of definitions"], &["Learning from demonstrations"],
            &[("Summary rewriting", 95), ("Flashcards", 90), ("Textbook study", 87)]),
        authored("K", "The Doer", "Learn by doing",
            "You learn through practice, experiments, and concrete examples.",
            &["Practical problem solving", "Learning from experience"], &["Long lectures"],
            &[("Hands-on projects", 96), ("Simulations", 90), ("Worked examples", 86)]),
        authored(MULTIMODAL_KEY, "The Multimodal Learner", "Every channel works",
            "No single mode dominates; you adapt your approach to the material.",
            &["Flexibility", "Combining sources"], &["Sticking with one method long enough"],
            &[("Mixed-media courses", 92), ("Project-based learning", 88), ("Study groups", 84)]),
    ];

    let fallback = authored("BALANCED", "The Balanced Learner", "Adaptable by default",
        "Your learning preferences do not point in a single direction.",
        &["Adaptability"], &["Identifying what works best"],
        &[("Mixed-media courses", 85), ("Structured study plans", 80)]);

    ArchetypeTable::new(entries, fallback)
});
