//! # Document Errors
//!
//! One error type covers the whole lookup path (store, resolver, verse utilities)
//! so handlers can map every failure to a status code in one place.

use thiserror::Error;

/// Result type for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Document lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    // Not found
    #[error("Bible not found: {0}")]
    DocumentNotFound(String),

    #[error("Book not found: {book}")]
    BookNotFound { book: i64 },

    #[error("Chapter not found: {book}:{chapter}")]
    ChapterNotFound { book: i64, chapter: i64 },

    #[error("Verse not found: {book}:{chapter}:{verse}")]
    VerseNotFound { book: i64, chapter: i64, verse: i64 },

    // Range errors
    #[error("Invalid verse range: {first}-{last}")]
    InvalidRange { first: i64, last: i64 },

    #[error("Bible has no verses: {0}")]
    EmptyDocument(String),

    // Storage
    #[error("Malformed bible '{id}': {reason}")]
    Parse { id: String, reason: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DocumentError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            DocumentError::DocumentNotFound(_) => 404,
            DocumentError::BookNotFound { .. } => 404,
            DocumentError::ChapterNotFound { .. } => 404,
            DocumentError::VerseNotFound { .. } => 404,
            DocumentError::InvalidRange { .. } => 400,
            DocumentError::EmptyDocument(_) => 404,
            DocumentError::Parse { .. } => 500,
            DocumentError::Storage(_) => 500,
        }
    }

    /// True for any of the not-found variants
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DocumentError::DocumentNotFound(_)
                | DocumentError::BookNotFound { .. }
                | DocumentError::ChapterNotFound { .. }
                | DocumentError::VerseNotFound { .. }
        )
    }

    /// True when the failure is on the server side rather than in the request
    pub fn is_internal(&self) -> bool {
        self.status_code() >= 500
    }
}
