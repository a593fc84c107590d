//! Keyword classification rules
//!
//! Scans one lowercased text item against fixed keyword taxonomies to add
//! personality traits and to flag the item itself as frustration or goal
//! evidence. All matches are plain substring containment, with no word
//! boundary requirement.

use crate::types::Persona;

/// Personality trait taxonomy: trait label → trigger keywords
const PERSONALITY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Analytical",
        &["data", "logic", "analyze", "research", "think", "science", "conclusion", "evidence"],
    ),
    (
        "Creative",
        &["art", "music", "drawing", "design", "writing", "creative", "imagine", "build"],
    ),
    (
        "Helpful",
        &["help", "advice", "suggest", "you should", "try this", "the solution is"],
    ),
    (
        "Expressive",
        &["i feel", "my opinion", "personally", "passionate", "i love", "i hate"],
    ),
];

/// Keywords that flag an item as frustration evidence
const FRUSTRATION_KEYWORDS: &[&str] =
    &["frustrated", "annoying", "hate", "disappointed", "issue", "problem"];

/// Keywords that flag an item as goal evidence
const GOAL_KEYWORDS: &[&str] =
    &["goal", "aim", "achieve", "learn", "improve", "start", "need to", "how to"];

/// Classify one text item.
///
/// `text` is the lowercased copy used for detection; `original` is the
/// unmodified source text stored as evidence when a frustration or goal
/// keyword hits. A single hit suffices per list; it is a presence test, not
/// a count.
pub fn classify(text: &str, original: &str, persona: &mut Persona) {
    for (label, keywords) in PERSONALITY_KEYWORDS {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            persona.personality_traits.insert((*label).to_string());
        }
    }

    if FRUSTRATION_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
        persona.frustrations.insert(original.to_string());
    }

    if GOAL_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
        persona.goals_and_needs.insert(original.to_string());
    }
}
