use super::loader::load_catalog;
use super::types::CatalogRecord;
use crate::search::engine;

use anyhow::{Result, anyhow};
use arc_swap::ArcSwap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Holds the current catalog snapshot.
///
/// Readers take a cheap `Arc` of the whole snapshot and scan it without locks.
/// Reloading builds a complete new snapshot and swaps it in at once, so a
/// scan in progress keeps seeing the snapshot it started with.
pub struct CatalogStore {
    snapshot: ArcSwap<Vec<CatalogRecord>>,
    source: Option<PathBuf>,
}

impl CatalogStore {
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(records),
            source: None,
        }
    }

    /// Loads the catalog from `path` and remembers it for [`CatalogStore::reload`].
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let records = load_catalog(&path).await?;

        Ok(Self {
            snapshot: ArcSwap::from_pointee(records),
            source: Some(path),
        })
    }

    pub fn snapshot(&self) -> Arc<Vec<CatalogRecord>> {
        self.snapshot.load_full()
    }

    pub fn list_all(&self) -> Arc<Vec<CatalogRecord>> {
        self.snapshot()
    }

    pub fn len(&self) -> usize {
        self.snapshot.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn search(&self, query: &str) -> Vec<CatalogRecord> {
        let snapshot = self.snapshot();
        engine::search(query, &snapshot)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn replace(&self, records: Vec<CatalogRecord>) {
        self.snapshot.store(Arc::new(records));
    }

    /// Re-reads the source file. On failure the current snapshot stays in place.
    pub async fn reload(&self) -> Result<usize> {
        let path = self
            .source
            .as_ref()
            .ok_or_else(|| anyhow!("catalog was not loaded from a file"))?;

        let records = load_catalog(path).await?;
        let count = records.len();
        self.replace(records);

        tracing::info!("Catalog reloaded: {} products", count);
        Ok(count)
    }
}
