//! Font Catalog Enricher Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod catalog;
pub mod enrichment;

// Re-export commonly used types for convenience
pub use catalog::{build_catalog, load_catalog, write_catalog, EnrichedCatalog, EnrichedFont};
pub use enrichment::FontCategory;
