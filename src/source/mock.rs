//! In-memory mock fetcher
//!
//! Always compiled so tests and offline experiments can drive the engine
//! without network access.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::types::TextItem;

use super::{SourceFetcher, UserHandle};

/// A `SourceFetcher` backed by an in-memory user → items map
#[derive(Debug, Default)]
pub struct MockFetcher {
    users: HashMap<String, Vec<TextItem>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user and their item batch
    pub fn with_user(mut self, username: impl Into<String>, items: Vec<TextItem>) -> Self {
        self.users.insert(username.into(), items);
        self
    }
}

#[async_trait]
impl SourceFetcher for MockFetcher {
    async fn resolve_user(&self, username: &str) -> Result<UserHandle> {
        if self.users.contains_key(username) {
            Ok(UserHandle {
                username: username.to_string(),
            })
        } else {
            Err(Error::user_not_found(username))
        }
    }

    async fn fetch_items(&self, user: &UserHandle) -> Result<Vec<TextItem>> {
        self.users
            .get(&user.username)
            .cloned()
            .ok_or_else(|| Error::user_not_found(&user.username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_known_user() {
        let fetcher = MockFetcher::new().with_user("alice", vec![]);
        let handle = fetcher.resolve_user("alice").await.unwrap();
        assert_eq!(handle.username, "alice");
    }

    #[tokio::test]
    async fn test_resolve_unknown_user() {
        let fetcher = MockFetcher::new();
        let err = fetcher.resolve_user("ghost").await.unwrap_err();
        assert!(matches!(err, Error::UserNotFound { .. }));
    }

    #[tokio::test]
    async fn test_fetch_items_preserves_order() {
        let items = vec![
            TextItem::new("first", "rust"),
            TextItem::new("second", "gaming"),
        ];
        let fetcher = MockFetcher::new().with_user("alice", items.clone());
        let handle = fetcher.resolve_user("alice").await.unwrap();
        assert_eq!(fetcher.fetch_items(&handle).await.unwrap(), items);
    }
}
