use crate::error::{RepoListError, Result};
use crate::types::{RateLimitState, RepoRecord};
use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};
use url::Url;

pub const API_BASE_URL: &str = "https://api.github.com";

pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Client for another API host, e.g. GitHub Enterprise or a local test server
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(RepoListError::ApiError(format!(
                "Base URL cannot have path segments: {}",
                base_url
            )));
        }

        // GitHub rejects requests without a User-Agent
        let client = Client::builder()
            .user_agent(concat!("repo-list/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(GitHubClient { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/users/{username}/repos?sort=updated`
    pub fn user_repos_url(&self, username: &str) -> Result<Url> {
        if username.trim().is_empty() {
            return Err(RepoListError::InvalidUsername(
                "username must not be empty".to_string(),
            ));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RepoListError::ApiError(format!("Invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .push("users")
            .push(username)
            .push("repos");
        url.query_pairs_mut().append_pair("sort", "updated");

        Ok(url)
    }

    async fn make_request(&self, url: Url) -> Result<Response> {
        let response = self
            .client
            .get(url.clone())
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        let rate_limit = rate_limit_state(response.headers());
        debug!(
            remaining = rate_limit.remaining,
            limit = rate_limit.limit,
            "GitHub rate limit"
        );

        match response.status() {
            StatusCode::OK => {
                if rate_limit.remaining < 5 {
                    warn!("Rate limit low ({} remaining)", rate_limit.remaining);
                }
                Ok(response)
            }
            StatusCode::NOT_FOUND => {
                Err(RepoListError::NotFound(format!("Resource not found: {}", url)))
            }
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS if rate_limit.is_limited => {
                Err(RepoListError::RateLimitExceeded(format!(
                    "API rate limit exceeded. Reset at: {}",
                    rate_limit.reset_time
                )))
            }
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(RepoListError::ApiError(format!(
                    "API request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }

    /// Fetch the user's repositories, most recently updated first.
    ///
    /// The status is checked before the body is decoded, so an error payload
    /// is never mistaken for a repository list.
    pub async fn fetch_user_repos(&self, username: &str) -> Result<Vec<RepoRecord>> {
        let url = self.user_repos_url(username)?;
        debug!("Fetching {}", url);

        let response = self.make_request(url).await?;
        let body = response.bytes().await?;
        let repos: Vec<RepoRecord> = serde_json::from_slice(&body)?;

        Ok(repos)
    }
}

/// Read the `X-RateLimit-*` headers of a response
pub fn rate_limit_state(headers: &HeaderMap) -> RateLimitState {
    let remaining = headers
        .get("X-RateLimit-Remaining")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse::<u32>().ok());

    let limit = headers
        .get("X-RateLimit-Limit")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(60);

    let reset = headers
        .get("X-RateLimit-Reset")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse::<i64>().ok())
        .and_then(|timestamp| DateTime::from_timestamp(timestamp, 0))
        .unwrap_or_else(|| Utc::now() + chrono::Duration::hours(1));

    RateLimitState {
        // A missing header means the host does not rate limit us
        remaining: remaining.unwrap_or(limit),
        limit,
        reset_time: reset,
        is_limited: remaining == Some(0),
    }
}
