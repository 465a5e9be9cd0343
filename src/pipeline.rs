use crate::dom::Element;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::render::render_repos;
use crate::types::RepoRecord;
use tracing::{error, info};

/// Where render failures are reported. Never shown to page visitors.
pub trait DiagnosticSink {
    fn report(&mut self, message: &str);
}

/// Reports through `tracing` at error level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, message: &str) {
        error!("{}", message);
    }
}

impl DiagnosticSink for Vec<String> {
    fn report(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Fetches one account's repositories and renders them into a container
pub struct RepoListRenderer {
    client: GitHubClient,
    username: String,
}

impl RepoListRenderer {
    pub fn new(client: GitHubClient, username: impl Into<String>) -> Self {
        RepoListRenderer {
            client,
            username: username.into(),
        }
    }

    pub async fn load(&self) -> Result<Vec<RepoRecord>> {
        self.client.fetch_user_repos(&self.username).await
    }

    /// Append one entry per repository to `container`, in API order.
    ///
    /// Any failure before rendering is reported once to `sink` and leaves the
    /// container untouched. Returns the number of entries appended.
    pub async fn render_into<S: DiagnosticSink>(&self, container: &mut Element, sink: &mut S) -> usize {
        match self.load().await {
            Ok(repos) => {
                let items = render_repos(&repos);
                let count = items.len();
                for item in items {
                    container.append_child(item);
                }
                info!("Rendered {} repositories for {}", count, self.username);
                count
            }
            Err(e) => {
                sink.report(&format!("Error fetching repos: {}", e));
                0
            }
        }
    }
}
