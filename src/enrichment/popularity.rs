//! Popularity scoring from cross-source frequency.

/// Map a source count to a coarse popularity score.
///
/// Fonts listed by three or more origin sites score 7, by two sites 5, and
/// everything else 3.
pub fn popularity_score(source_count: u32) -> u8 {
    match source_count {
        count if count >= 3 => 7,
        2 => 5,
        _ => 3,
    }
}
