use crate::enrichment::FontCategory;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Schema tag identifying the enriched catalog format.
pub const SCHEMA_TAG: &str = "font-catalog-enriched";
/// Version of the enriched catalog format.
pub const CATALOG_VERSION: &str = "1.0.0";

/// Raw crawled catalog, as produced by the crawler.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub fonts: Vec<RawFontRecord>,
}

/// One crawled font entry. Every field may be missing in the wild.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawFontRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Category labels from the origin site, in site order.
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub downloaded: bool,
    #[serde(default)]
    pub local_file: Option<String>,
    /// Number of distinct origin sites that listed this font.
    #[serde(default)]
    pub source_count: Option<u32>,
}

impl RawFontRecord {
    /// Combined name + description blob the text rules match against.
    pub fn search_text(&self) -> String {
        format!(
            "{} {}",
            self.name.as_deref().unwrap_or(""),
            self.description.as_deref().unwrap_or("")
        )
    }
}

/// UI-ready font entry in the enriched catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedFont {
    pub name: String,
    pub font_family: String,
    pub local_file: String,
    pub category: FontCategory,
    /// Sorted, deduplicated, never empty.
    pub tags: Vec<String>,
    /// Supported weight range. The crawl carries no per-weight variants.
    pub weight: [u16; 2],
    pub popularity: u8,
    pub description: String,
    pub source_count: u32,
}

/// Occurrence counts keyed by label, kept in first-seen insertion order and
/// serialized as a JSON object in that order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CountMap(Vec<(String, usize)>);

impl CountMap {
    pub fn increment(&mut self, key: &str) {
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some((_, count)) => *count += 1,
            None => self.0.push((key.to_owned(), 1)),
        }
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, c)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(k, c)| (k.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, c)| c).sum()
    }

    /// The `n` highest counts, descending, ties keeping first-seen order.
    pub fn top(&self, n: usize) -> CountMap {
        let mut entries = self.0.clone();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        CountMap(entries)
    }
}

impl Serialize for CountMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, count) in &self.0 {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

/// Aggregate statistics over one enrichment run.
#[derive(Clone, Debug, Serialize)]
pub struct CatalogStats {
    /// Records kept and enriched.
    pub total: usize,
    /// Records dropped by the filter.
    pub skipped: usize,
    /// Per-category counts over the kept records.
    pub categories: CountMap,
    /// The 15 most frequent tags, descending by count.
    #[serde(rename = "topTags")]
    pub top_tags: CountMap,
}

/// The enriched catalog document written to disk.
#[derive(Clone, Debug, Serialize)]
pub struct EnrichedCatalog {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub version: String,
    pub generated: String,
    pub stats: CatalogStats,
    pub fonts: Vec<EnrichedFont>,
}
