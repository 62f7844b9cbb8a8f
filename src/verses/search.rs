//! Substring search over the flat verse sequence

use serde::{Deserialize, Serialize};

use super::iter_verses;
use crate::document::{Document, Verse};

/// Case handling for verse search.
///
/// `Compat` lowercases the query but compares against the verse text as stored,
/// so a query containing capitals can only match lowercase text. It matches the
/// behavior existing API clients see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    #[default]
    Compat,
    /// Lowercase both query and verse text
    CaseInsensitive,
}

/// Returns every verse whose text contains `query`, in document order
pub fn search<'a>(document: &'a Document, query: &str, mode: SearchMode) -> Vec<&'a Verse> {
    let needle = query.to_lowercase();

    match mode {
        SearchMode::Compat => iter_verses(document)
            .filter(|verse| verse.text.contains(&needle))
            .collect(),
        SearchMode::CaseInsensitive => iter_verses(document)
            .filter(|verse| verse.text.to_lowercase().contains(&needle))
            .collect(),
    }
}
