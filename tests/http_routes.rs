//! HTTP Route Tests
//!
//! Drives the full router in-process:
//! - Ordinal paths map onto the resolver
//! - not-found → 404, invalid range → 400, malformed bible → 500
//! - Catalog and health endpoints

mod common;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use bible_api::catalog::Catalog;
use bible_api::document::{CachePolicy, DirectorySource, DocumentStore};
use bible_api::http_server::{HttpServer, HttpServerConfig, ServerContext};
use bible_api::verses::SearchMode;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_router(search_mode: SearchMode) -> (TempDir, Router) {
    let tmp = common::setup_data_dir();
    let store = DocumentStore::open(
        DirectorySource::new(tmp.path().join("bibles")),
        CachePolicy::Retain,
    )
    .unwrap();
    let catalog = Catalog::load(
        &tmp.path().join("versions.json"),
        &tmp.path().join("languages.json"),
    )
    .unwrap();

    let context = ServerContext {
        store: Arc::new(store),
        catalog: Arc::new(catalog),
        search_mode,
    };
    let router = HttpServer::build_router(&HttpServerConfig::default(), context);
    (tmp, router)
}

async fn send(router: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Method::GET, uri).await
}

// =============================================================================
// Catalog / Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let (_tmp, router) = setup_router(SearchMode::Compat);
    let (status, body) = get(&router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["documents"], 3);
}

#[tokio::test]
async fn test_catalogs() {
    let (_tmp, router) = setup_router(SearchMode::Compat);

    let (status, body) = get(&router, "/api/bible/all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "King James Version");
    assert_eq!(body[1]["language_id"], 3);
    assert_eq!(body[0]["abbreviation"], "KJV");

    let (status, body) = get(&router, "/api/languages").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!([{ "id": 2, "language": "English" }, { "id": 3, "language": "Spanish" }])
    );
}

// =============================================================================
// Traversal
// =============================================================================

#[tokio::test]
async fn test_books_and_book() {
    let (_tmp, router) = setup_router(SearchMode::Compat);

    let (status, body) = get(&router, "/api/bible/kjv/books").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, common::sample_bible()["books"]);

    let (status, body) = get(&router, "/api/bible/kjv/book/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bookname"], "Exodus");

    let (status, body) = get(&router, "/api/bible/kjv/book/0").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn test_all_chapters() {
    let (_tmp, router) = setup_router(SearchMode::Compat);

    let (status, body) = get(&router, "/api/bible/kjv/1/allchapters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([1, 2]));

    let (status, body) = get(&router, "/api/bible/empty/1/allchapters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));

    let (status, _) = get(&router, "/api/bible/kjv/9/allchapters").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_chapter_and_verse() {
    let (_tmp, router) = setup_router(SearchMode::Compat);

    let (status, body) = get(&router, "/api/bible/kjv/1/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["chapter"], "2");
    assert_eq!(body["verses"].as_array().unwrap().len(), 3);

    let (status, body) = get(&router, "/api/bible/kjv/1/1/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bv"], "Let there be light");
    assert_eq!(body["verse"], "3");

    let (status, _) = get(&router, "/api/bible/kjv/1/1/6").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&router, "/api/bible/kjv/1/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_verse_range() {
    let (_tmp, router) = setup_router(SearchMode::Compat);

    let (status, body) = get(&router, "/api/bible/kjv/1/1/3/100").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, body) = get(&router, "/api/bible/kjv/1/1/2/1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    let (status, _) = get(&router, "/api/bible/kjv/1/1/10/12").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Chapter does not resolve: not-found wins over range checks
    let (status, _) = get(&router, "/api/bible/kjv/1/5/2/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Whole-Document Routes
// =============================================================================

#[tokio::test]
async fn test_complete() {
    let (_tmp, router) = setup_router(SearchMode::Compat);

    let (status, body) = get(&router, "/api/bible/complete/kjv").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, common::sample_bible());
    assert_eq!(body["version"], "KJV");
}

#[tokio::test]
async fn test_search_modes() {
    let (_tmp, router) = setup_router(SearchMode::Compat);

    let (status, body) = send(&router, Method::POST, "/api/bible/search/kjv/love").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = send(&router, Method::POST, "/api/bible/search/kjv/God").await;
    assert_eq!(body, serde_json::json!([]));

    let (_, body) = send(&router, Method::POST, "/api/bible/search/kjv/seventh%20day").await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_tmp, router) = setup_router(SearchMode::CaseInsensitive);
    let (_, body) = send(&router, Method::POST, "/api/bible/search/kjv/God").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_requires_post() {
    let (_tmp, router) = setup_router(SearchMode::Compat);
    let (status, _) = get(&router, "/api/bible/search/kjv/love").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_random() {
    let (_tmp, router) = setup_router(SearchMode::Compat);

    let (status, body) = get(&router, "/api/bible/random/kjv").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["bv"].is_string());

    let (status, _) = get(&router, "/api/bible/random/empty").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Storage Failures
// =============================================================================

#[tokio::test]
async fn test_unknown_and_broken_bibles() {
    let (_tmp, router) = setup_router(SearchMode::Compat);

    let (status, body) = get(&router, "/api/bible/web/books").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Bible not found: web");

    let (status, body) = get(&router, "/api/bible/broken/books").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], 500);
}
