mod category;
mod popularity;
mod rules;
mod tags;

pub use category::infer_category;
pub use popularity::popularity_score;
pub use rules::{CategoryRules, TagRules, CATEGORY_RULES, TAG_RULES};
pub use tags::extract_tags;

use serde::{Deserialize, Serialize};

/// Coarse typeface classification assigned to every kept font.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontCategory {
    Sans,
    Serif,
    Handwriting,
    Display,
    Monospace,
}

impl FontCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontCategory::Sans => "sans",
            FontCategory::Serif => "serif",
            FontCategory::Handwriting => "handwriting",
            FontCategory::Display => "display",
            FontCategory::Monospace => "monospace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&FontCategory::Handwriting).unwrap();
        assert_eq!(json, "\"handwriting\"");
    }

    #[test]
    fn test_as_str_matches_serde_rename() {
        for category in [
            FontCategory::Sans,
            FontCategory::Serif,
            FontCategory::Handwriting,
            FontCategory::Display,
            FontCategory::Monospace,
        ] {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }
}
