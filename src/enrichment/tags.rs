//! Tag extraction: union accumulation over the ordered rule tables.
//!
//! Unlike category inference this is non-exclusive, every matching rule
//! contributes its tags. A per-category fallback guarantees the result is
//! never empty.

use super::rules::TagRules;
use super::FontCategory;
use crate::catalog::RawFontRecord;
use std::collections::BTreeSet;

/// Extract descriptive tags for a crawled font.
///
/// `category` is the already-inferred category of the record, used only for
/// the fallback when no rule matched. The returned tags are deduplicated and
/// sorted.
pub fn extract_tags(
    record: &RawFontRecord,
    category: FontCategory,
    rules: &TagRules,
) -> Vec<String> {
    let mut tags: BTreeSet<&str> = BTreeSet::new();

    let blob = record.search_text();
    for (pattern, rule_tags) in &rules.text_rules {
        if pattern.is_match(&blob) {
            tags.extend(rule_tags.iter().copied());
        }
    }

    if let Some(categories) = &record.categories {
        for label in categories {
            let normalized = label.trim().to_lowercase();
            if let Some(extra) = rules.category_extra.get(normalized.as_str()) {
                tags.extend(extra.iter().copied());
            }
        }
    }

    if tags.is_empty() {
        let fallback = rules
            .fallback
            .get(&category)
            .unwrap_or(&rules.fallback_default);
        tags.extend(fallback.iter().copied());
    }

    tags.into_iter().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::TAG_RULES;
    use regex::Regex;
    use std::collections::HashMap;

    fn record(name: &str, description: &str, categories: &[&str]) -> RawFontRecord {
        RawFontRecord {
            name: Some(name.to_owned()),
            description: Some(description.to_owned()),
            categories: if categories.is_empty() {
                None
            } else {
                Some(categories.iter().map(|c| c.to_string()).collect())
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_all_matching_rules_contribute() {
        let record = record("テスト", "力強いレトロな書体", &[]);
        let tags = extract_tags(&record, FontCategory::Display, &TAG_RULES);
        assert!(tags.contains(&"力強い".to_owned()));
        assert!(tags.contains(&"インパクト".to_owned()));
        assert!(tags.contains(&"レトロ".to_owned()));
    }

    #[test]
    fn test_tags_are_deduplicated_and_sorted() {
        // the text rule and the source-category both yield かわいい
        let record = record("かわいいフォント", "", &["kawaii"]);
        let tags = extract_tags(&record, FontCategory::Display, &TAG_RULES);
        let mut sorted = tags.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(tags, sorted);
        assert_eq!(tags.iter().filter(|t| *t == "かわいい").count(), 1);
    }

    #[test]
    fn test_source_category_extra_tags() {
        let record = record("x", "", &["pixel"]);
        let tags = extract_tags(&record, FontCategory::Display, &TAG_RULES);
        assert!(tags.contains(&"レトロ".to_owned()));
        assert!(tags.contains(&"テクノ".to_owned()));
    }

    #[test]
    fn test_source_category_is_normalized() {
        let record = record("x", "", &[" Tegaki "]);
        let tags = extract_tags(&record, FontCategory::Handwriting, &TAG_RULES);
        assert!(tags.contains(&"手書き風".to_owned()));
        assert!(tags.contains(&"カジュアル".to_owned()));
    }

    #[test]
    fn test_fallback_uses_inferred_category() {
        let record = record("無銘", "", &[]);
        let tags = extract_tags(&record, FontCategory::Serif, &TAG_RULES);
        assert_eq!(tags, vec!["エレガント".to_owned(), "フォーマル".to_owned()]);
    }

    #[test]
    fn test_fallback_for_sans_category() {
        let record = record("まるもじ", "", &[]);
        let tags = extract_tags(&record, FontCategory::Sans, &TAG_RULES);
        let mut expected = vec!["読みやすい".to_owned(), "モダン".to_owned()];
        expected.sort();
        assert_eq!(tags, expected);
    }

    #[test]
    fn test_result_is_never_empty() {
        for category in [
            FontCategory::Sans,
            FontCategory::Serif,
            FontCategory::Handwriting,
            FontCategory::Display,
            FontCategory::Monospace,
        ] {
            let tags = extract_tags(&RawFontRecord::default(), category, &TAG_RULES);
            assert!(!tags.is_empty());
        }
    }

    #[test]
    fn test_substituted_rule_tables() {
        let rules = TagRules {
            text_rules: vec![(Regex::new("zzz").unwrap(), vec!["custom"])],
            category_extra: HashMap::new(),
            fallback: HashMap::new(),
            fallback_default: vec!["default"],
        };
        let matching = record("zzz", "", &[]);
        assert_eq!(
            extract_tags(&matching, FontCategory::Sans, &rules),
            vec!["custom".to_owned()]
        );
        let empty = record("plain", "", &[]);
        assert_eq!(
            extract_tags(&empty, FontCategory::Sans, &rules),
            vec!["default".to_owned()]
        );
    }
}
