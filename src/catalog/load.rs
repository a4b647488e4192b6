use super::RawCatalog;
use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;

/// Load the raw crawled catalog from disk.
///
/// A missing file or unparsable JSON aborts the run; a missing or empty
/// `fonts` array is a valid catalog with zero records.
pub fn load_catalog(path: &Path) -> Result<RawCatalog> {
    if !path.is_file() {
        bail!("raw catalog not found: {}", path.display());
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("could not read raw catalog {}", path.display()))?;
    let catalog: RawCatalog = serde_json::from_str(&text)
        .with_context(|| format!("could not parse raw catalog {}", path.display()))?;

    info!(
        "Loaded {} raw font records from {}",
        catalog.fonts.len(),
        path.display()
    );
    Ok(catalog)
}
