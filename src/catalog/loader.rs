use super::builder::build;
use super::types::{CatalogRecord, RawProduct};
use anyhow::{Context, Result};
use std::path::Path;

/// Reads a catalog file (a JSON array of listings) and builds every entry.
pub async fn load_catalog(path: &Path) -> Result<Vec<CatalogRecord>> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;

    let records = parse_catalog(&json)
        .with_context(|| format!("failed to parse catalog file {}", path.display()))?;

    tracing::info!("Loaded {} products from {}", records.len(), path.display());
    Ok(records)
}

/// Entries with neither a name nor a description are dropped.
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogRecord>> {
    let raw_products: Vec<RawProduct> = serde_json::from_str(json)?;
    let total = raw_products.len();

    let records: Vec<CatalogRecord> = raw_products.into_iter().filter_map(build).collect();

    let skipped = total - records.len();
    if skipped > 0 {
        tracing::warn!(
            "Skipped {} of {} catalog entries without name or description",
            skipped,
            total
        );
    }

    Ok(records)
}
