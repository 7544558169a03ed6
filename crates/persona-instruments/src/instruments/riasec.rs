use persona_core::models::item::{AssessmentItem, Dimension, Polarity};

use super::{dimension, items_for};
use crate::Assessment;
use crate::archetype::{ArchetypeTable, EXPLORER_KEY, MULTI_KEY, ResolutionStrategy, authored};

use Polarity::{Negative, Positive};

/// RIASEC career interest inventory (Holland codes).
/// 30 items, five per interest area, rated 1–5. Resolves to one of the 30
/// two-letter codes or a tie sentinel.
pub struct Riasec;

impl Assessment for Riasec {
    fn id(&self) -> &str {
        "riasec"
    }

    fn name(&self) -> &str {
        "Career Interest Profile"
    }

    fn dimensions(&self) -> &[Dimension] {
        static DIMENSIONS: std::sync::LazyLock<Vec<Dimension>> = std::sync::LazyLock::new(|| {
            vec![
                dimension("R", "Realistic", "Hands-on work with tools, machines, plants, or animals"),
                dimension("I", "Investigative", "Observing, analysing, and solving problems"),
                dimension("A", "Artistic", "Creating, designing, and expressing ideas"),
                dimension("S", "Social", "Helping, teaching, and caring for people"),
                dimension("E", "Enterprising", "Leading, persuading, and taking risks"),
                dimension("C", "Conventional", "Organising data and following clear procedures"),
            ]
        });
        &DIMENSIONS
    }

    fn items(&self) -> &[AssessmentItem] {
        static ITEMS: std::sync::LazyLock<Vec<AssessmentItem>> = std::sync::LazyLock::new(|| {
            let mut items = Vec::new();
            items.extend(items_for("r", "R", &[
                ("I enjoy building or repairing things with my hands.", Positive),
                ("I would like to work outdoors most of the day.", Positive),
                ("I like operating tools or machinery.", Positive),
                ("I would rather avoid physical or mechanical work.", Negative),
                ("I like seeing a tangible result at the end of the day.", Positive),
            ]));
            items.extend(items_for("i", "I", &[
                ("I like figuring out how things work.", Positive),
                ("I enjoy solving maths or logic puzzles.", Positive),
                ("I find scientific questions boring.", Negative),
                ("I like researching a topic in depth.", Positive),
                ("I enjoy testing ideas with experiments.", Positive),
            ]));
            items.extend(items_for("a", "A", &[
                ("I enjoy drawing, writing, or making music.", Positive),
                ("I like work where I can express my own ideas.", Positive),
                ("I prefer tasks with clear rules over open-ended ones.", Negative),
                ("I notice design and style in everyday things.", Positive),
                ("I like coming up with original solutions.", Positive),
            ]));
            items.extend(items_for("s", "S", &[
                ("I like helping people with their problems.", Positive),
                ("I enjoy teaching or explaining things to others.", Positive),
                ("I would rather work alone than with people.", Negative),
                ("I am good at understanding how others feel.", Positive),
                ("I would like to work in a caring profession.", Positive),
            ]));
            items.extend(items_for("e", "E", &[
                ("I like taking the lead in a group.", Positive),
                ("I enjoy persuading people to see my point of view.", Positive),
                ("I would like to run my own business.", Positive),
                ("I avoid situations where I have to take risks.", Negative),
                ("I am motivated by competition and goals.", Positive),
            ]));
            items.extend(items_for("c", "C", &[
                ("I like keeping records neat and organised.", Positive),
                ("I enjoy working with numbers and data.", Positive),
                ("I like following a clear set of procedures.", Positive),
                ("I find detailed paperwork frustrating.", Negative),
                ("I like checking work for accuracy.", Positive),
            ]));
            items
        });
        &ITEMS
    }

    fn archetypes(&self) -> &ArchetypeTable {
        &ARCHETYPES
    }

    fn strategy(&self) -> ResolutionStrategy {
        ResolutionStrategy::PairCode
    }
}

static ARCHETYPES: std::sync::LazyLock<ArchetypeTable> = std::sync::LazyLock::new(|| {
    let entries = vec![
        // Realistic-led
        authored("RI", "The Engineer", "Builds what others theorise",
            "Combines practical skill with analytical thinking to make systems work.",
            &["Mechanical reasoning", "Systematic troubleshooting"], &["Explaining technical work to non-specialists"],
            &[("Mechanical Engineer", 94), ("Civil Engineer", 90), ("Field Technician", 85)]),
        authored("RA", "The Craftsperson", "Makes beautiful things that work",
            "Turns materials into functional objects with a strong sense of form.",
            &["Manual dexterity", "Visual judgement"], &["Planning long projects"],
            &[("Carpenter", 92), ("Industrial Designer", 88), ("Landscape Architect", 84)]),
        authored("RS", "The Practical Helper", "Helps with hands, not just words",
            "Supports people through concrete, physical assistance.",
            &["Dependability", "Calm under pressure"], &["Self-promotion"],
            &[("Paramedic", 93), ("Physical Therapist", 89), ("Athletic Trainer", 84)]),
        authored("RE", "The Builder", "Gets projects off the ground",
            "Leads practical work and takes ownership of results.",
            &["Decisiveness", "Project execution"], &["Delegating detail"],
            &[("Construction Manager", 94), ("Farm Manager", 87), ("Contractor", 86)]),
        authored("RC", "The Technician", "Precision in every step",
            "Brings order and accuracy to hands-on technical work.",
            &["Attention to detail", "Procedural reliability"], &["Adapting to ambiguity"],
            &[("Electrician", 92), ("Quality Inspector", 88), ("Aircraft Mechanic", 86)]),
        // Investigative-led
        authored("IR", "The Applied Scientist", "Tests ideas in the real world",
            "Investigates problems and verifies answers with hands-on work.",
            &["Experimental design", "Technical depth"], &["Tolerating unfinished answers"],
            &[("Lab Scientist", 93), ("Geologist", 89), ("Robotics Engineer", 87)]),
        authored("IA", "The Innovator", "Curiosity meets imagination",
            "Explores ideas across disciplines and invents new approaches.",
            &["Original thinking", "Conceptual depth"], &["Following through on routine tasks"],
            &[("UX Researcher", 91), ("Architect", 88), ("Science Writer", 85)]),
        authored("IS", "The Healer", "Understands problems to help people",
            "Applies analytical skill in service of others' wellbeing.",
            &["Diagnostic thinking", "Empathy"], &["Setting boundaries"],
            &[("Physician", 94), ("Psychologist", 91), ("Pharmacist", 86)]),
        authored("IE", "The Strategist", "Turns analysis into advantage",
            "Uses research and evidence to make high-stakes decisions.",
            &["Data-driven judgement", "Long-range planning"], &["Patience with slow consensus"],
            &[("Management Consultant", 92), ("Product Manager", 88), ("Economist", 85)]),
        authored("IC", "The Analyst", "Finds the signal in the data",
            "Works methodically through information to reach sound conclusions.",
            &["Rigour", "Quantitative skill"], &["Presenting to large groups"],
            &[("Data Analyst", 94), ("Actuary", 90), ("Software Tester", 84)]),
        // Artistic-led
        authored("AR", "The Maker", "Ideas you can hold",
            "Expresses creativity through physical materials and craft.",
            &["Visual creativity", "Craftsmanship"], &["Structured schedules"],
            &[("Sculptor", 91), ("Set Designer", 88), ("Jeweller", 84)]),
        authored("AI", "The Visionary", "Imagines what could be",
            "Blends creative expression with intellectual exploration.",
            &["Conceptual creativity", "Curiosity"], &["Closing out projects"],
            &[("Game Designer", 92), ("Creative Technologist", 89), ("Author", 85)]),
        authored("AS", "The Storyteller", "Creativity that connects",
            "Uses expression to move, teach, and include people.",
            &["Communication", "Emotional insight"], &["Handling criticism"],
            &[("Drama Therapist", 90), ("Teacher of the Arts", 89), ("Journalist", 85)]),
        authored("AE", "The Creative Director", "Leads with vision",
            "Drives creative work forward and sells the idea to others.",
            &["Persuasive vision", "Taste"], &["Budget discipline"],
            &[("Creative Director", 94), ("Film Producer", 89), ("Brand Strategist", 86)]),
        authored("AC", "The Designer", "Beauty with structure",
            "Brings aesthetic sense to systems that must be precise.",
            &["Layout and typography", "Consistency"], &["Improvising under pressure"],
            &[("Graphic Designer", 93), ("Technical Illustrator", 87), ("Web Designer", 86)]),
        // Social-led
        authored("SR", "The Coach", "Helps people grow through doing",
            "Guides others through practical activity and physical challenge.",
            &["Encouragement", "Practical instruction"], &["Abstract planning"],
            &[("Sports Coach", 92), ("Occupational Therapist", 89), ("Outdoor Educator", 86)]),
        authored("SI", "The Counselor", "Understanding people deeply",
            "Combines care for others with a drive to understand why.",
            &["Active listening", "Insight"], &["Detaching from others' problems"],
            &[("Counselor", 94), ("Nurse Practitioner", 90), ("Social Researcher", 84)]),
        authored("SA", "The Mentor", "Nurtures creativity in others",
            "Helps people express themselves and find their voice.",
            &["Warmth", "Creative facilitation"], &["Administrative follow-up"],
            &[("Art Therapist", 92), ("Primary Teacher", 89), ("Youth Worker", 86)]),
        authored("SE", "The Advocate", "Mobilises people for a cause",
            "Leads and organises communities toward shared goals.",
            &["Influence", "Relationship building"], &["Saying no"],
            &[("Community Organiser", 93), ("HR Manager", 88), ("School Principal", 86)]),
        authored("SC", "The Caretaker", "Reliable support, every time",
            "Provides structured, dependable care and service.",
            &["Consistency", "Patience"], &["Embracing change"],
            &[("Medical Assistant", 91), ("Librarian", 87), ("Case Manager", 86)]),
        // Enterprising-led
        authored("ER", "The Operator", "Makes things run",
            "Leads practical operations and keeps teams producing.",
            &["Operational leadership", "Pragmatism"], &["Long-term reflection"],
            &[("Operations Manager", 93), ("Logistics Manager", 89), ("Restaurant Owner", 85)]),
        authored("EI", "The Entrepreneur", "Spots opportunity in ideas",
            "Turns insight into ventures and takes calculated risks.",
            &["Opportunity recognition", "Strategic thinking"], &["Delegation of detail"],
            &[("Startup Founder", 93), ("Venture Analyst", 88), ("Technology Sales Lead", 85)]),
        authored("EA", "The Promoter", "Makes ideas impossible to ignore",
            "Combines creative flair with the drive to persuade.",
            &["Presentation", "Creative marketing"], &["Routine administration"],
            &[("Marketing Manager", 93), ("Event Producer", 88), ("Talent Agent", 84)]),
        authored("ES", "The Leader", "Brings people together to win",
            "Motivates teams and builds networks to reach goals.",
            &["Motivation", "Negotiation"], &["Listening before deciding"],
            &[("Sales Director", 92), ("Politician", 88), ("Team Manager", 87)]),
        authored("EC", "The Executive", "Ambition with a plan",
            "Leads organisations through structure, targets, and accountability.",
            &["Goal setting", "Financial judgement"], &["Flexibility"],
            &[("Business Manager", 94), ("Financial Planner", 89), ("Bank Manager", 86)]),
        // Conventional-led
        authored("CR", "The Coordinator", "Keeps the physical world organised",
            "Manages materials, inventory, and technical records with care.",
            &["Organisation", "Reliability"], &["Public speaking"],
            &[("Inventory Controller", 91), ("CAD Technician", 87), ("Surveyor", 84)]),
        authored("CI", "The Auditor", "Accuracy above all",
            "Verifies, checks, and analyses information methodically.",
            &["Precision", "Analytical checking"], &["Comfort with ambiguity"],
            &[("Accountant", 94), ("Auditor", 91), ("Database Administrator", 86)]),
        authored("CA", "The Editor", "Polishes ideas into shape",
            "Brings structure and correctness to creative material.",
            &["Language precision", "Style consistency"], &["Generating first drafts"],
            &[("Editor", 92), ("Archivist", 87), ("Content Manager", 85)]),
        authored("CS", "The Administrator", "The backbone of every team",
            "Organises systems so that people are well served.",
            &["Process design", "Service orientation"], &["Challenging authority"],
            &[("Office Manager", 92), ("Registrar", 88), ("Payroll Specialist", 85)]),
        authored("CE", "The Planner", "Structure that drives results",
            "Combines organisational rigour with commercial focus.",
            &["Planning", "Compliance"], &["Improvisation"],
            &[("Project Coordinator", 93), ("Compliance Officer", 89), ("Budget Analyst", 87)]),
        // Tie sentinels
        authored(MULTI_KEY, "The Multi-Potentialite", "Many interests, many paths",
            "Three or more interest areas are equally strong; you thrive where variety is part of the job.",
            &["Versatility", "Fast learning"], &["Choosing a focus"],
            &[("Product Manager", 88), ("Entrepreneur", 86), ("Teacher", 84)]),
        authored(EXPLORER_KEY, "The Explorer", "Every direction is still open",
            "Your interests are evenly spread; try short projects in different fields to find what sticks.",
            &["Open-mindedness", "Adaptability"], &["Committing to a direction"],
            &[("Apprenticeship Programme", 80), ("General Studies", 78), ("Volunteer Work", 76)]),
    ];

    let fallback = authored("GENERALIST", "The Generalist", "A broad base to build on",
        "Your interests span several areas without a single dominant theme.",
        &["Breadth", "Flexibility"], &["Depth in one area"],
        &[("Project Coordinator", 80), ("Customer Success", 78), ("Small Business Owner", 76)]);

    ArchetypeTable::new(entries, fallback)
});
