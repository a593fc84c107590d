//! Text items produced by a source fetcher

use serde::{Deserialize, Serialize};

/// One authored text item: a comment body, or a submission's title and
/// selftext joined as `"{title}. {selftext}"`. Immutable input to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextItem {
    /// The full text content
    pub content: String,

    /// The community (subreddit) the item was posted in
    pub community: String,
}

impl TextItem {
    pub fn new(content: impl Into<String>, community: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            community: community.into(),
        }
    }

    /// Build an item from a submission's title and selftext
    pub fn from_submission(
        title: &str,
        selftext: &str,
        community: impl Into<String>,
    ) -> Self {
        Self {
            content: format!("{}. {}", title, selftext),
            community: community.into(),
        }
    }
}
