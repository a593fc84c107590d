//! Source fetchers
//!
//! A source fetcher resolves a username to a handle and produces the bounded
//! batch of text items the engine analyzes. The engine only depends on the
//! `SourceFetcher` trait; the Reddit client is one implementation, the mock
//! fetcher another.

mod mock;
mod reddit;

pub use mock::MockFetcher;
pub use reddit::RedditClient;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::types::TextItem;

/// A resolved user identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserHandle {
    /// Canonical username as reported by the source
    pub username: String,
}

/// Produces the item batch for one user.
///
/// Implementations must return items in a deterministic order: newest-first
/// comments followed by newest-first submissions, each bounded by the
/// configured item limit.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Resolve a username to a handle.
    ///
    /// Fails with [`Error::UserNotFound`] for nonexistent, suspended, or
    /// otherwise unreachable accounts.
    async fn resolve_user(&self, username: &str) -> Result<UserHandle>;

    /// Fetch the bounded batch of text items for a resolved user
    async fn fetch_items(&self, user: &UserHandle) -> Result<Vec<TextItem>>;
}

static PROFILE_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"user/([\w-]+)").expect("profile URL pattern is valid"));

/// Extract the username from a Reddit profile URL.
///
/// Accepts URLs of the form `https://www.reddit.com/user/<name>/`; anything
/// that is not an absolute URL containing a `user/<name>` segment is an
/// [`Error::InvalidProfileUrl`].
pub fn parse_profile_url(input: &str) -> Result<String> {
    let parsed = url::Url::parse(input).map_err(|_| Error::invalid_profile_url(input))?;

    PROFILE_URL_RE
        .captures(parsed.path())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::invalid_profile_url(input))
}
