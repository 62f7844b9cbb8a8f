//! Health HTTP Route

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::document::DocumentStore;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Registered documents
    pub documents: usize,
    /// Documents currently parsed and cached
    pub cached: usize,
}

/// Health check route, mounted at root level
pub fn health_routes(store: Arc<DocumentStore>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(store)
}

async fn health_handler(State(store): State<Arc<DocumentStore>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        documents: store.len(),
        cached: store.cached_count(),
    };

    (StatusCode::OK, Json(response))
}
