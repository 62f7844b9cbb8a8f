//! Ordinal conversion

/// Parses a path segment as an ordinal.
///
/// Anything that is not an integer becomes 0, which no lookup resolves.
pub fn parse_ordinal(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

/// Converts a 1-based ordinal to a 0-based index into a sequence of `len` items
pub(crate) fn to_index(ordinal: i64, len: usize) -> Option<usize> {
    if ordinal < 1 {
        return None;
    }
    let index = usize::try_from(ordinal - 1).ok()?;
    (index < len).then_some(index)
}
