use super::EnrichedCatalog;
use anyhow::{Context, Result};
use std::path::Path;

/// Serialize the enriched catalog and write it to disk.
///
/// Pretty-printed UTF-8; serde_json leaves non-ASCII text unescaped, so the
/// Japanese names and tags are written literally.
pub fn write_catalog(catalog: &EnrichedCatalog, path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(catalog).context("could not serialize enriched catalog")?;
    std::fs::write(path, json)
        .with_context(|| format!("could not write enriched catalog {}", path.display()))?;
    Ok(())
}
