//! Batch-migration driver: read authored records, enrich, write, report.
//!
//! Per-record failure isolation lives here, not in the indexer. A record
//! that fails validation or fails to write is logged and skipped; the rest
//! of the batch still goes through.

use std::path::Path;
use std::time::Instant;

use anyhow::Context as _;

use crate::config::IndexerConfig;
use crate::error::Result;
use crate::index;
use crate::record::Record;
use crate::store::DocumentStore;

/// Outcome counts for one migration batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Documents written to the store.
    pub written: usize,
    /// Records skipped after a validation or write failure.
    pub skipped: usize,
}

/// Reads a JSON array of authored records.
pub async fn load_records(path: &Path) -> Result<Vec<Record>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read records from {}", path.display()))?;
    let records: Vec<Record> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse records in {}", path.display()))?;
    Ok(records)
}

/// Runs one migration batch: enrich each record and write it to the store.
///
/// Each record's derived fields are computed from its final authored state
/// immediately before its own write; records are independent of each other
/// and the batch never aborts on a single failure.
pub async fn run_migration<S: DocumentStore>(
    records: Vec<Record>,
    store: &mut S,
    collection: &str,
    config: &IndexerConfig,
) -> MigrationReport {
    let start = Instant::now();
    let total = records.len();
    let mut report = MigrationReport::default();

    for record in records {
        let id = record.id.clone();

        let enriched = match index::enrich(record, config) {
            Ok(enriched) => enriched,
            Err(e) => {
                tracing::warn!("Skipping record '{}': {}", id, e);
                report.skipped += 1;
                continue;
            }
        };

        let document = match serde_json::to_value(&enriched) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!("Skipping record '{}': serialization failed: {}", id, e);
                report.skipped += 1;
                continue;
            }
        };

        match store.put(collection, &id, document).await {
            Ok(()) => report.written += 1,
            Err(e) => {
                tracing::warn!("Skipping record '{}': write failed: {:#}", id, e);
                report.skipped += 1;
            }
        }
    }

    tracing::info!(
        "Migrated collection '{}': {} written, {} skipped of {} records in {:?}",
        collection,
        report.written,
        report.skipped,
        total,
        start.elapsed()
    );

    report
}
