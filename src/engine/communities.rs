//! Community aggregation and motivation resolution
//!
//! Tallies how often each community label occurs across a run, derives the
//! most frequent ones, and cross-references them against the motivation
//! taxonomy.

use std::collections::BTreeSet;
use std::collections::HashMap;

/// Motivation taxonomy: category label → community-name keywords
const MOTIVATION_COMMUNITIES: &[(&str, &[&str])] = &[
    (
        "Wellness & Health",
        &["fitness", "loseit", "health", "mentalhealth", "meditation", "selfimprovement"],
    ),
    (
        "Financial Growth",
        &["personalfinance", "investing", "stocks", "fire", "financialindependence", "frugal"],
    ),
    (
        "Career & Learning",
        &["cscareerquestions", "learnpython", "programming", "datascience", "askengineers", "college"],
    ),
    (
        "Entertainment & Hobbies",
        &["gaming", "movies", "books", "music", "hobbies", "dnd", "boardgames"],
    ),
    (
        "Social & Community",
        &["askreddit", "relationships", "socialskills", "discussion"],
    ),
];

/// Frequency tally over community labels, remembering first-encounter order
/// so ties rank deterministically.
#[derive(Debug, Default)]
pub struct CommunityTally {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl CommunityTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a community label
    pub fn record(&mut self, community: impl Into<String>) {
        let community = community.into();
        match self.counts.get_mut(&community) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(community.clone(), 1);
                self.order.push(community);
            }
        }
    }

    /// Whether no labels were recorded
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The top `n` communities by descending count; ties broken by
    /// first-encountered order.
    pub fn top(&self, n: usize) -> Vec<String> {
        let mut ranked = self.order.clone();
        // Stable sort keeps first-encounter order within equal counts.
        ranked.sort_by(|a, b| self.counts[b].cmp(&self.counts[a]));
        ranked.truncate(n);
        ranked
    }
}

/// Map the top communities to motivation categories.
///
/// A category applies when any top community contains any of its keywords as
/// a substring; one community may trigger several categories.
pub fn resolve_motivations(top_communities: &[String]) -> BTreeSet<String> {
    let mut motivations = BTreeSet::new();

    for (category, keywords) in MOTIVATION_COMMUNITIES {
        let triggered = top_communities.iter().any(|community| {
            keywords.iter().any(|keyword| community.contains(keyword))
        });
        if triggered {
            motivations.insert((*category).to_string());
        }
    }

    motivations
}
