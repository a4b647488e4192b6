//! Font Catalog Enrichment Tool
//!
//! Reads the raw crawled font catalog and writes the enriched, UI-ready
//! catalog: every downloaded font gets an inferred category, descriptive
//! tags and a popularity score, and the output carries aggregate stats.

use anyhow::Result;
use clap::Parser;
use font_catalog_enricher::catalog::{build_catalog, load_catalog, write_catalog};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "enrich-catalog")]
#[command(about = "Enrich a crawled font catalog with categories, tags and popularity")]
struct Args {
    /// Path to the raw crawled catalog JSON.
    #[arg(long, default_value = "assets/fonts/japanese/font-catalog-v2.json")]
    input: PathBuf,

    /// Path to write the enriched catalog JSON.
    #[arg(long, default_value = "assets/fonts/japanese/font-catalog-enriched.json")]
    output: PathBuf,

    /// Generation date (YYYY-MM-DD) stamped into the output. Defaults to today.
    #[arg(long)]
    generated: Option<String>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let generated = args
        .generated
        .unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d").to_string());

    let raw = load_catalog(&args.input)?;
    let enriched = build_catalog(&raw, &generated);
    write_catalog(&enriched, &args.output)?;

    info!(
        "Enriched {} fonts -> {}",
        enriched.stats.total,
        args.output.display()
    );
    info!("  Skipped: {}", enriched.stats.skipped);
    info!("  Categories:");
    for (category, count) in enriched.stats.categories.iter() {
        info!("    {}: {}", category, count);
    }
    info!("  Top tags:");
    for (tag, count) in enriched.stats.top_tags.iter().take(10) {
        info!("    {}: {}", tag, count);
    }

    Ok(())
}
