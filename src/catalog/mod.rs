mod build;
mod load;
mod models;
mod write;

pub use build::{build_catalog, enrich_font};
pub use load::load_catalog;
pub use models::{
    CatalogStats, CountMap, EnrichedCatalog, EnrichedFont, RawCatalog, RawFontRecord,
    CATALOG_VERSION, SCHEMA_TAG,
};
pub use write::write_catalog;
