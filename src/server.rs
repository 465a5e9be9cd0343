use crate::page::Page;
use crate::pipeline::{RepoListRenderer, TracingSink};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Liveness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Shared state for the page server
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<RepoListRenderer>,
    pub title: String,
    pub container_class: String,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(repo_page))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the page server
pub async fn start_server(state: AppState, addr: &str) -> crate::error::Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Serving repository list on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Each page view runs the fetch and render once. A failed fetch still
/// serves the page, with an empty list.
async fn repo_page(State(state): State<AppState>) -> impl IntoResponse {
    let mut page = Page::new(&state.title, &state.container_class);

    let Some(container) = page.container_mut() else {
        error!("No container with class {:?} in page", state.container_class);
        return (StatusCode::INTERNAL_SERVER_ERROR, Html(String::new()));
    };

    state.renderer.render_into(container, &mut TracingSink).await;

    (StatusCode::OK, Html(page.to_html()))
}

async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
