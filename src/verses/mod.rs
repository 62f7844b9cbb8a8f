//! Whole-document verse utilities
//!
//! Everything here works on the flat verse sequence of a document: every
//! chapter's verses, book by book, chapter by chapter. The sequence is
//! recomputed per call; there is no index.

mod random;
mod search;

pub use random::{random_verse, random_verse_with};
pub use search::{search, SearchMode};

use crate::document::{Document, Verse};

/// Iterates every verse in book, chapter, verse order
pub fn iter_verses(document: &Document) -> impl Iterator<Item = &Verse> {
    document
        .bible
        .iter()
        .flat_map(|book| &book.chapters)
        .flat_map(|chapter| &chapter.verses)
}

/// Collects the flat verse sequence
pub fn flatten(document: &Document) -> Vec<&Verse> {
    iter_verses(document).collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::document;
    use super::*;

    #[test]
    fn test_flatten_order_and_length() {
        let doc = document(&[&[&["a", "b"], &["c"]], &[&[], &["d", "e"]]]);
        let texts: Vec<_> = flatten(&doc).iter().map(|v| v.text.as_str()).collect();

        assert_eq!(texts, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(texts.len(), doc.verse_count());
    }

    #[test]
    fn test_flatten_empty_document() {
        let doc = document(&[]);
        assert!(flatten(&doc).is_empty());
    }
}
