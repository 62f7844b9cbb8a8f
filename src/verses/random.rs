//! Uniform random verse selection

use rand::seq::SliceRandom;
use rand::Rng;

use super::flatten;
use crate::document::{Document, DocumentError, DocumentResult, Verse};

/// Picks a verse uniformly at random using the thread-local generator
pub fn random_verse(document: &Document) -> DocumentResult<&Verse> {
    random_verse_with(document, &mut rand::thread_rng())
}

/// Picks a verse uniformly at random from `rng`.
///
/// Fails with `EmptyDocument` when there is nothing to draw from.
pub fn random_verse_with<'a, R: Rng + ?Sized>(
    document: &'a Document,
    rng: &mut R,
) -> DocumentResult<&'a Verse> {
    flatten(document)
        .choose(rng)
        .copied()
        .ok_or_else(|| DocumentError::EmptyDocument(document.id.clone()))
}
