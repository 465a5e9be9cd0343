#![allow(dead_code)]

use axum::{
    extract::{Path, Query},
    http::{HeaderMap, HeaderValue, StatusCode},
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Username the mock API knows about; any other account is a 404
pub const KNOWN_USER: &str = "octocat";

/// Canned response served by the mock GitHub API
#[derive(Clone)]
pub struct MockResponse {
    pub status: StatusCode,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

impl MockResponse {
    pub fn ok(body: &str) -> Self {
        MockResponse {
            status: StatusCode::OK,
            headers: vec![("X-RateLimit-Remaining", "59".to_string())],
            body: body.to_string(),
        }
    }
}

/// In-process stand-in for `api.github.com` on an ephemeral port
pub struct MockGitHub {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl MockGitHub {
    pub async fn start(response: MockResponse) -> anyhow::Result<Self> {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        let app = Router::new().route(
            "/users/:user/repos",
            get(
                move |Path(user): Path<String>, Query(query): Query<HashMap<String, String>>| {
                    let response = response.clone();
                    let counter = counter.clone();
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);

                        if query.get("sort").map(String::as_str) != Some("updated") {
                            return (StatusCode::BAD_REQUEST, HeaderMap::new(), "missing sort".to_string());
                        }
                        if user != KNOWN_USER {
                            return (
                                StatusCode::NOT_FOUND,
                                HeaderMap::new(),
                                r#"{"message":"Not Found"}"#.to_string(),
                            );
                        }

                        let mut headers = HeaderMap::new();
                        for (name, value) in &response.headers {
                            if let Ok(value) = HeaderValue::from_str(value) {
                                headers.insert(*name, value);
                            }
                        }
                        (response.status, headers, response.body)
                    }
                },
            ),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(MockGitHub {
            base_url: format!("http://{}", addr),
            hits,
        })
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Base URL of a port nothing listens on
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{}", addr)
}
