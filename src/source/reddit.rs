//! Reddit API source fetcher
//!
//! Implements `SourceFetcher` against the public Reddit OAuth API using a
//! script-app `client_credentials` grant. The constructor takes the
//! credential settings explicitly; there is no process-wide credential state.

use chrono::{DateTime, Duration, Utc};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::RedditSettings;
use crate::error::{Error, Result};
use crate::types::TextItem;

use super::{SourceFetcher, UserHandle};

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const API_BASE: &str = "https://oauth.reddit.com";

// ─────────────────────────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Deserialize)]
struct AboutResponse {
    data: AboutData,
}

#[derive(Debug, Deserialize)]
struct AboutData {
    name: String,
    #[serde(default)]
    is_suspended: bool,
}

#[derive(Debug, Deserialize)]
struct Listing<T> {
    data: ListingData<T>,
}

#[derive(Debug, Deserialize)]
struct ListingData<T> {
    children: Vec<ListingChild<T>>,
}

#[derive(Debug, Deserialize)]
struct ListingChild<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct CommentData {
    body: String,
    subreddit: String,
}

#[derive(Debug, Deserialize)]
struct SubmissionData {
    title: String,
    #[serde(default)]
    selftext: String,
    subreddit: String,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

// ─────────────────────────────────────────────────────────────────
// RedditClient
// ─────────────────────────────────────────────────────────────────

/// Read-only Reddit API client for fetching a user's recent activity
#[derive(Debug)]
pub struct RedditClient {
    settings: RedditSettings,
    http: Client,
    token: Mutex<Option<CachedToken>>,
}

impl RedditClient {
    /// Create a client from explicit settings.
    ///
    /// Fails with [`Error::CredentialsMissing`] before any network
    /// interaction if the script-app credentials are absent.
    pub fn new(settings: RedditSettings) -> Result<Self> {
        if settings.client_id.is_empty() || settings.client_secret.is_empty() {
            return Err(Error::CredentialsMissing);
        }

        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(settings.request_timeout_secs))
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!(user_agent = %settings.user_agent, "Reddit client created");

        Ok(Self {
            settings,
            http,
            token: Mutex::new(None),
        })
    }

    /// Get a valid bearer token, requesting a fresh one when missing or
    /// within a minute of expiry
    async fn access_token(&self) -> Result<String> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.expires_at > Utc::now() + Duration::seconds(60) {
                return Ok(token.access_token.clone());
            }
        }

        debug!("Requesting Reddit API access token");
        let response = self
            .http
            .post(TOKEN_URL)
            .basic_auth(&self.settings.client_id, Some(&self.settings.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Error::AuthFailed {
                message: format!("token endpoint returned {}", status),
            });
        }
        if !status.is_success() {
            return Err(Error::fetch_failed(
                TOKEN_URL,
                format!("status {}", status),
            ));
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            Error::fetch_failed(TOKEN_URL, format!("invalid token response: {}", e))
        })?;

        let fresh = CachedToken {
            access_token: token.access_token.clone(),
            expires_at: Utc::now() + Duration::seconds(token.expires_in),
        };
        *cached = Some(fresh);

        Ok(token.access_token)
    }

    /// Perform an authenticated GET against the OAuth API
    async fn api_get(&self, path: &str) -> Result<reqwest::Response> {
        let token = self.access_token().await?;
        let url = format!("{}{}", API_BASE, path);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await?;

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => Err(Error::RateLimited),
            StatusCode::UNAUTHORIZED => Err(Error::AuthFailed {
                message: "bearer token rejected".to_string(),
            }),
            status if status.is_success() => Ok(response),
            status => Err(Error::fetch_failed(url, format!("status {}", status))),
        }
    }

    /// Fetch the user's newest comments
    async fn fetch_comments(&self, username: &str) -> Result<Vec<TextItem>> {
        let path = format!(
            "/user/{}/comments?limit={}&sort=new",
            username, self.settings.item_limit
        );
        let listing: Listing<CommentData> = self.api_get(&path).await?.json().await?;

        Ok(listing
            .data
            .children
            .into_iter()
            .map(|child| TextItem::new(child.data.body, child.data.subreddit))
            .collect())
    }

    /// Fetch the user's newest submissions
    async fn fetch_submissions(&self, username: &str) -> Result<Vec<TextItem>> {
        let path = format!(
            "/user/{}/submitted?limit={}&sort=new",
            username, self.settings.item_limit
        );
        let listing: Listing<SubmissionData> = self.api_get(&path).await?.json().await?;

        Ok(listing
            .data
            .children
            .into_iter()
            .map(|child| {
                TextItem::from_submission(&child.data.title, &child.data.selftext, child.data.subreddit)
            })
            .collect())
    }
}

#[async_trait]
impl SourceFetcher for RedditClient {
    async fn resolve_user(&self, username: &str) -> Result<UserHandle> {
        let token = self.access_token().await?;
        let url = format!("{}/user/{}/about", API_BASE, username);

        let response = self.http.get(&url).bearer_auth(token).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND | StatusCode::FORBIDDEN => {
                return Err(Error::user_not_found(username));
            }
            StatusCode::TOO_MANY_REQUESTS => return Err(Error::RateLimited),
            status if !status.is_success() => {
                return Err(Error::fetch_failed(url, format!("status {}", status)));
            }
            _ => {}
        }

        let about: AboutResponse = response.json().await.map_err(|e| {
            Error::fetch_failed(url, format!("invalid about response: {}", e))
        })?;

        if about.data.is_suspended {
            warn!(username, "Account is suspended");
            return Err(Error::user_not_found(username));
        }

        Ok(UserHandle {
            username: about.data.name,
        })
    }

    /// Newest-first comments, then newest-first submissions, each bounded by
    /// the configured item limit
    async fn fetch_items(&self, user: &UserHandle) -> Result<Vec<TextItem>> {
        let mut items = self.fetch_comments(&user.username).await?;
        let submissions = self.fetch_submissions(&user.username).await?;
        items.extend(submissions);

        info!(
            username = %user.username,
            items = items.len(),
            "Fetched user activity"
        );

        Ok(items)
    }
}
