//! Catalog build: filter, enrich, sort, aggregate.

use super::models::{
    CatalogStats, CountMap, EnrichedCatalog, EnrichedFont, RawCatalog, RawFontRecord,
    CATALOG_VERSION, SCHEMA_TAG,
};
use crate::enrichment::{
    extract_tags, infer_category, popularity_score, CATEGORY_RULES, TAG_RULES,
};

/// How many tags the `topTags` stat reports.
const TOP_TAGS_COUNT: usize = 15;

/// Placeholder weight range, the crawl carries no per-weight variants.
const DEFAULT_WEIGHT: [u16; 2] = [400, 400];

/// Enrich a single crawled record, or `None` if it fails the filter.
///
/// A record is kept only if it was downloaded, references a local file and has
/// a non-blank name. The three checks are independent; failing any one drops
/// the record.
pub fn enrich_font(record: &RawFontRecord) -> Option<EnrichedFont> {
    if !record.downloaded {
        return None;
    }
    let local_file = record.local_file.as_deref().filter(|f| !f.is_empty())?;
    let name = record
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())?;

    let category = infer_category(record, &CATEGORY_RULES);
    let tags = extract_tags(record, category, &TAG_RULES);
    let source_count = record.source_count.unwrap_or(1);

    Some(EnrichedFont {
        name: name.to_owned(),
        font_family: name.to_owned(),
        local_file: local_file.to_owned(),
        category,
        tags,
        weight: DEFAULT_WEIGHT,
        popularity: popularity_score(source_count),
        description: record.description.clone().unwrap_or_default(),
        source_count,
    })
}

/// Build the enriched catalog from the raw one.
///
/// `generated` is the date string stamped into the output; injecting it keeps
/// the output reproducible for a fixed input.
pub fn build_catalog(raw: &RawCatalog, generated: &str) -> EnrichedCatalog {
    let mut fonts = Vec::with_capacity(raw.fonts.len());
    let mut skipped = 0usize;
    for record in &raw.fonts {
        match enrich_font(record) {
            Some(font) => fonts.push(font),
            None => skipped += 1,
        }
    }

    // stable sort: full ties keep their input order
    fonts.sort_by(|a, b| {
        b.popularity
            .cmp(&a.popularity)
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut categories = CountMap::default();
    let mut tag_counts = CountMap::default();
    for font in &fonts {
        categories.increment(font.category.as_str());
        for tag in &font.tags {
            tag_counts.increment(tag);
        }
    }

    EnrichedCatalog {
        schema: SCHEMA_TAG.to_owned(),
        version: CATALOG_VERSION.to_owned(),
        generated: generated.to_owned(),
        stats: CatalogStats {
            total: fonts.len(),
            skipped,
            categories,
            top_tags: tag_counts.top(TOP_TAGS_COUNT),
        },
        fonts,
    }
}
