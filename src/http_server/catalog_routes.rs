//! Catalog HTTP Routes
//!
//! Static translation and language lists.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::catalog::{Catalog, Language, Translation};

/// Create catalog routes
pub fn catalog_routes(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/bible/all", get(translations_handler))
        .route("/languages", get(languages_handler))
        .with_state(catalog)
}

async fn translations_handler(State(catalog): State<Arc<Catalog>>) -> Json<Vec<Translation>> {
    Json(catalog.translations().to_vec())
}

async fn languages_handler(State(catalog): State<Arc<Catalog>>) -> Json<Vec<Language>> {
    Json(catalog.languages().to_vec())
}
