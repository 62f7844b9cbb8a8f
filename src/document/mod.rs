//! Document store subsystem
//!
//! Loads per-translation JSON files into immutable in-memory trees:
//! Bible → Book → Chapter → Verse.
//!
//! # Design Principles
//!
//! - Explicit registry of ids, built from a directory scan
//! - Documents are never mutated after load
//! - Caching is a policy choice, not a correctness requirement

mod errors;
mod source;
mod store;
mod types;

pub use errors::{DocumentError, DocumentResult};
pub use source::{DirectorySource, DocumentSource, MemorySource};
pub use store::{CachePolicy, DocumentStore};
pub use types::{Book, BookSummary, Chapter, Document, Extra, Label, Verse};
