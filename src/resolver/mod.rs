//! Path resolver
//!
//! Translates external 1-based coordinates (book, chapter, verse ordinals) into
//! nodes of a loaded document. This is the only place ordinal arithmetic happens;
//! everything else works with resolved references.
//!
//! # Edge-case policy
//!
//! - Non-positive or too-large ordinals do not resolve (`*NotFound`)
//! - A verse range whose slice is empty is `InvalidRange`, distinct from not-found
//! - A range `last` past the end of the chapter truncates to the chapter end

mod ordinal;

pub use ordinal::parse_ordinal;

use crate::document::{Book, BookSummary, Chapter, Document, DocumentError, DocumentResult, Verse};

use ordinal::to_index;

/// Returns the document's book summary list verbatim; empty when the file has none
pub fn books(document: &Document) -> &[BookSummary] {
    document.books.as_deref().unwrap_or_default()
}

/// Resolves a book by its 1-based ordinal
pub fn book(document: &Document, book: i64) -> DocumentResult<&Book> {
    to_index(book, document.bible.len())
        .map(|i| &document.bible[i])
        .ok_or(DocumentError::BookNotFound { book })
}

/// Lists `1..=N` where N is the number of chapters in the book
pub fn chapter_numbers(document: &Document, book_ordinal: i64) -> DocumentResult<Vec<i64>> {
    let count = book(document, book_ordinal)?.chapters.len() as i64;
    Ok((1..=count).collect())
}

/// Resolves a chapter by book and chapter ordinals
pub fn chapter(document: &Document, book_ordinal: i64, chapter: i64) -> DocumentResult<&Chapter> {
    let located = book(document, book_ordinal)?;
    to_index(chapter, located.chapters.len())
        .map(|i| &located.chapters[i])
        .ok_or(DocumentError::ChapterNotFound {
            book: book_ordinal,
            chapter,
        })
}

/// Resolves a single verse
pub fn verse(
    document: &Document,
    book_ordinal: i64,
    chapter_ordinal: i64,
    verse: i64,
) -> DocumentResult<&Verse> {
    let located = chapter(document, book_ordinal, chapter_ordinal)?;
    to_index(verse, located.verses.len())
        .map(|i| &located.verses[i])
        .ok_or(DocumentError::VerseNotFound {
            book: book_ordinal,
            chapter: chapter_ordinal,
            verse,
        })
}

/// Resolves the inclusive verse range `[first, last]`.
///
/// Slices `[first - 1, min(last, len))`. An empty slice is `InvalidRange`.
pub fn verse_range(
    document: &Document,
    book_ordinal: i64,
    chapter_ordinal: i64,
    first: i64,
    last: i64,
) -> DocumentResult<&[Verse]> {
    let located = chapter(document, book_ordinal, chapter_ordinal)?;
    let invalid = DocumentError::InvalidRange { first, last };

    if first < 1 || last < first {
        return Err(invalid);
    }

    let len = located.verses.len();
    let start = usize::try_from(first - 1).map_err(|_| invalid.clone())?;
    let end = usize::try_from(last).map_or(len, |last| last.min(len));

    if start >= end {
        return Err(invalid);
    }

    Ok(&located.verses[start..end])
}
