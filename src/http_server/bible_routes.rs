//! Bible HTTP Routes
//!
//! Read-only endpoints over loaded documents. Path coordinates are 1-based
//! ordinals and are handed to the resolver untouched.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::debug;

use super::errors::ApiError;
use crate::document::{Document, DocumentStore};
use crate::resolver::{self, parse_ordinal};
use crate::verses::{self, SearchMode};

// ==================
// Shared State
// ==================

/// Bible state shared across handlers
pub struct BibleState {
    pub store: Arc<DocumentStore>,
    pub search_mode: SearchMode,
}

impl BibleState {
    pub fn new(store: Arc<DocumentStore>, search_mode: SearchMode) -> Self {
        Self { store, search_mode }
    }

    fn load(&self, bible_id: &str) -> Result<Arc<Document>, ApiError> {
        Ok(self.store.load(bible_id)?)
    }
}

type ApiResult = Result<Response, ApiError>;

// ==================
// Bible Routes
// ==================

/// Create bible routes
pub fn bible_routes(state: Arc<BibleState>) -> Router {
    Router::new()
        // Whole-document operations
        .route("/bible/complete/:bible_id", get(complete_handler))
        .route("/bible/search/:bible_id/:query", post(search_handler))
        .route("/bible/random/:bible_id", get(random_handler))
        // Traversal
        .route("/bible/:bible_id/books", get(books_handler))
        .route("/bible/:bible_id/book/:book", get(book_handler))
        .route("/bible/:bible_id/:book/allchapters", get(chapter_numbers_handler))
        .route("/bible/:bible_id/:book/:chapter", get(chapter_handler))
        .route("/bible/:bible_id/:book/:chapter/:verse", get(verse_handler))
        .route("/bible/:bible_id/:book/:chapter/:verse/:last", get(verse_range_handler))
        .with_state(state)
}

// ==================
// Traversal Handlers
// ==================

async fn books_handler(
    State(state): State<Arc<BibleState>>,
    Path(bible_id): Path<String>,
) -> ApiResult {
    let document = state.load(&bible_id)?;
    Ok(Json(resolver::books(&document)).into_response())
}

async fn book_handler(
    State(state): State<Arc<BibleState>>,
    Path((bible_id, book)): Path<(String, String)>,
) -> ApiResult {
    let document = state.load(&bible_id)?;
    let located = resolver::book(&document, parse_ordinal(&book))?;
    Ok(Json(located).into_response())
}

async fn chapter_numbers_handler(
    State(state): State<Arc<BibleState>>,
    Path((bible_id, book)): Path<(String, String)>,
) -> ApiResult {
    let document = state.load(&bible_id)?;
    let numbers = resolver::chapter_numbers(&document, parse_ordinal(&book))?;
    Ok(Json(numbers).into_response())
}

async fn chapter_handler(
    State(state): State<Arc<BibleState>>,
    Path((bible_id, book, chapter)): Path<(String, String, String)>,
) -> ApiResult {
    let document = state.load(&bible_id)?;
    let located = resolver::chapter(&document, parse_ordinal(&book), parse_ordinal(&chapter))?;
    Ok(Json(located).into_response())
}

async fn verse_handler(
    State(state): State<Arc<BibleState>>,
    Path((bible_id, book, chapter, verse)): Path<(String, String, String, String)>,
) -> ApiResult {
    let document = state.load(&bible_id)?;
    let located = resolver::verse(
        &document,
        parse_ordinal(&book),
        parse_ordinal(&chapter),
        parse_ordinal(&verse),
    )?;
    Ok(Json(located).into_response())
}

async fn verse_range_handler(
    State(state): State<Arc<BibleState>>,
    Path((bible_id, book, chapter, first, last)): Path<(String, String, String, String, String)>,
) -> ApiResult {
    let document = state.load(&bible_id)?;
    let verses = resolver::verse_range(
        &document,
        parse_ordinal(&book),
        parse_ordinal(&chapter),
        parse_ordinal(&first),
        parse_ordinal(&last),
    )?;
    Ok(Json(verses).into_response())
}

// ==================
// Whole-Document Handlers
// ==================

async fn complete_handler(
    State(state): State<Arc<BibleState>>,
    Path(bible_id): Path<String>,
) -> ApiResult {
    let document = state.load(&bible_id)?;
    Ok(Json(&*document).into_response())
}

async fn search_handler(
    State(state): State<Arc<BibleState>>,
    Path((bible_id, query)): Path<(String, String)>,
) -> ApiResult {
    let document = state.load(&bible_id)?;
    let found = verses::search(&document, &query, state.search_mode);
    debug!(bible_id = %bible_id, query = %query, matches = found.len(), "search");
    Ok(Json(found).into_response())
}

async fn random_handler(
    State(state): State<Arc<BibleState>>,
    Path(bible_id): Path<String>,
) -> ApiResult {
    let document = state.load(&bible_id)?;
    let verse = verses::random_verse(&document)?;
    Ok(Json(verse).into_response())
}
