//! Bible document types
//!
//! The wire layout follows the per-translation JSON files:
//!
//! ```text
//! { "books": [{ "index", "name" }],
//!   "bible": [{ "bookname", "chapters": [{ "chapter", "verses": [{ "id", "bv", "book", "chapter", "verse" }] }] }] }
//! ```
//!
//! Numeric labels are kept in whatever encoding the source file uses (string or
//! integer) and serialized back unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A label that the source may encode either as a string or as an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Number(i64),
    Text(String),
}

impl Label {
    /// Returns the numeric value, parsing text labels when possible
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Label::Number(n) => Some(*n),
            Label::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Number(n) => write!(f, "{}", n),
            Label::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Label {
    fn from(n: i64) -> Self {
        Label::Number(n)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Text(s.to_string())
    }
}

/// Keys outside the typed model, kept so documents serialize back unchanged
pub type Extra = Map<String, Value>;

/// Smallest addressable unit of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub id: Label,
    /// Verse content
    #[serde(rename = "bv")]
    pub text: String,
    pub book: Label,
    pub chapter: Label,
    pub verse: Label,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A chapter and its verses, in verse order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// String form of the chapter's 1-based ordinal
    pub chapter: Label,
    pub verses: Vec<Verse>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A book and its chapters, in chapter order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "bookname", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub chapters: Vec<Chapter>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Entry of a document's book summary list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub index: Label,
    pub name: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One complete Bible translation.
///
/// Immutable once loaded; the store hands it out behind an `Arc`. Keys the
/// model does not name are carried in `extra` at every level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Registry id, assigned by the store (not part of the file)
    #[serde(skip)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub books: Option<Vec<BookSummary>>,
    pub bible: Vec<Book>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Document {
    /// Parses a document from raw JSON bytes
    pub fn from_slice(id: &str, bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let mut document: Document = serde_json::from_slice(bytes)?;
        document.id = id.to_string();
        Ok(document)
    }

    /// Number of books in the document
    pub fn book_count(&self) -> usize {
        self.bible.len()
    }

    /// Total number of verses across all books and chapters
    pub fn verse_count(&self) -> usize {
        self.bible
            .iter()
            .flat_map(|book| &book.chapters)
            .map(|chapter| chapter.verses.len())
            .sum()
    }
}
