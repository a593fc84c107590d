//! Persona inference engine
//!
//! Orchestrates the per-item classification passes and the post-pass
//! aggregation that turn a user's text items into a completed persona
//! record. Processing is strictly sequential: demographic fields are
//! first-observation-wins, so output is path-dependent on input order.

mod communities;
mod demographics;
mod keywords;

pub use communities::{resolve_motivations, CommunityTally};

use tracing::{debug, info};

use crate::error::Result;
use crate::source::SourceFetcher;
use crate::types::{Persona, TextItem};

/// Number of most-frequent communities considered for habits and motivations
pub const TOP_COMMUNITIES: usize = 5;

/// Build a persona for a username via a source fetcher.
///
/// Resolves the user (failing with `UserNotFound` if the account cannot be
/// resolved), fetches the bounded item batch, and folds it into a completed
/// persona. Either a complete persona is produced or an error; no partial
/// record ever escapes.
pub async fn build_persona(fetcher: &dyn SourceFetcher, username: &str) -> Result<Persona> {
    let handle = fetcher.resolve_user(username).await?;
    info!(username = %handle.username, "Analyzing user activity");

    let items = fetcher.fetch_items(&handle).await?;
    Ok(build_from_items(&handle.username, &items))
}

/// Fold a fixed item sequence into a completed persona.
///
/// Pure with respect to its inputs: the same sequence always yields an equal
/// persona.
pub fn build_from_items(username: &str, items: &[TextItem]) -> Persona {
    let mut persona = Persona::new(username);
    let mut tally = CommunityTally::new();

    for item in items {
        let lowered = item.content.to_lowercase();
        demographics::extract(&lowered, &mut persona.demographics);
        keywords::classify(&lowered, &item.content, &mut persona);
        tally.record(item.community.to_lowercase());
    }

    // With no observed communities there is nothing to aggregate; the
    // persona is complete as-is.
    if !tally.is_empty() {
        let top = tally.top(TOP_COMMUNITIES);
        persona.behaviour_and_habits.push(format!(
            "Frequently posts or comments in communities like: {}",
            top.join(", ")
        ));
        persona.motivations.extend(resolve_motivations(&top));
    }

    debug!(
        username,
        items = items.len(),
        traits = persona.personality_traits.len(),
        motivations = persona.motivations.len(),
        "Analysis complete"
    );

    persona
}
