use super::ui;
use crate::core::{ItemDocument, item};
use crate::store::jsonl::{self, WriteMode};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichReport {
    pub total: usize,
    pub enriched: usize,
}

/// Loads every item at `path`, adds the native-market price where missing and
/// rewrites the whole file.
pub fn run(path: &Path, mode: WriteMode) -> Result<EnrichReport> {
    let mut items: Vec<ItemDocument> = jsonl::load(path)?;

    let mut enriched = 0;
    for doc in items.iter_mut() {
        if item::enrich(doc).with_context(|| format!("Failed to enrich {}", path.display()))? {
            enriched += 1;
        }
    }

    jsonl::save(path, &items, mode)?;

    let report = EnrichReport {
        total: items.len(),
        enriched,
    };
    info!(?report, path = %path.display(), "Enrichment complete");
    println!(
        "{}",
        ui::enrich_summary(&path.display().to_string(), report.total, report.enriched)
    );
    Ok(report)
}
