//! Category inference: first-match-wins dispatch over the ordered rule tables.

use super::rules::CategoryRules;
use super::FontCategory;
use crate::catalog::RawFontRecord;

/// Infer the category of a crawled font.
///
/// Source-site category labels are tried first, in the order the site listed
/// them. If none is known, the ordered text rules run over the combined
/// name + description blob; the first matching rule wins. Missing text is a
/// non-match, never an error.
pub fn infer_category(record: &RawFontRecord, rules: &CategoryRules) -> FontCategory {
    if let Some(categories) = &record.categories {
        for label in categories {
            let normalized = label.trim().to_lowercase();
            if let Some(category) = rules.source_map.get(normalized.as_str()) {
                return *category;
            }
        }
    }

    let blob = record.search_text();
    for (pattern, category) in &rules.text_rules {
        if pattern.is_match(&blob) {
            return *category;
        }
    }

    rules.fallback
}
