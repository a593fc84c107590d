//! The persona record and its demographic fields

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Sentinel value for a demographic attribute that was never inferred
pub const UNKNOWN: &str = "Unknown";

/// One inferred demographic attribute with a single resolved value.
///
/// Write-once per run: once set away from `"Unknown"` it is never
/// overwritten by later items (the within-item single-status override in the
/// demographic extractor is the one exception).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemographicField {
    pub value: String,
}

impl Default for DemographicField {
    fn default() -> Self {
        Self {
            value: UNKNOWN.to_string(),
        }
    }
}

impl DemographicField {
    /// Whether this field still holds the `"Unknown"` sentinel
    pub fn is_unknown(&self) -> bool {
        self.value == UNKNOWN
    }

    /// Set the value only if the field is still unknown. Returns true if the
    /// value was stored.
    pub fn fill(&mut self, value: impl Into<String>) -> bool {
        if self.is_unknown() {
            self.value = value.into();
            true
        } else {
            false
        }
    }

    /// Set the value unconditionally
    pub fn overwrite(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// The four inferred demographic attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    pub age: DemographicField,
    pub occupation: DemographicField,
    pub location: DemographicField,
    pub status: DemographicField,
}

/// The structured output record summarizing inferred attributes of one user.
///
/// Created empty at the start of a run, mutated only by the persona builder
/// and the components it invokes, and immutable output afterwards. The
/// set-backed collections cannot hold duplicates, and iterate in
/// lexicographic order so rendering is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub username: String,
    pub demographics: Demographics,
    pub motivations: BTreeSet<String>,
    pub personality_traits: BTreeSet<String>,
    /// Free-text observations, append-only, in generation order
    pub behaviour_and_habits: Vec<String>,
    /// Source text snippets flagged as frustration evidence
    pub frustrations: BTreeSet<String>,
    /// Source text snippets flagged as goal evidence
    pub goals_and_needs: BTreeSet<String>,
}

impl Persona {
    /// Create an empty persona record for a user
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            demographics: Demographics::default(),
            motivations: BTreeSet::new(),
            personality_traits: BTreeSet::new(),
            behaviour_and_habits: Vec::new(),
            frustrations: BTreeSet::new(),
            goals_and_needs: BTreeSet::new(),
        }
    }
}
