use serde::{Deserialize, Serialize};

// GitHub API response structures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRecord {
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl RepoRecord {
    /// Description text worth showing, if any. Only the empty string counts as absent.
    pub fn display_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Rate limit quota reported by the GitHub API on each response
#[derive(Debug, Clone)]
pub struct RateLimitState {
    pub remaining: u32,
    pub limit: u32,
    pub reset_time: chrono::DateTime<chrono::Utc>,
    pub is_limited: bool,
}
