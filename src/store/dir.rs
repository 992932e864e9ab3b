//! Filesystem-backed store: one JSON file per document.

use std::path::PathBuf;

use anyhow::Context as _;

use super::DocumentStore;
use crate::error::Result;

/// Writes each document to `<root>/<collection>/<id>.json`.
///
/// Gives migrations a concrete local target without a hosted database; the
/// layout mirrors how a document store addresses by collection and id.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path a document for `(collection, id)` is written to.
    pub fn document_path(&self, collection: &str, id: &str) -> PathBuf {
        self.root.join(collection).join(format!("{id}.json"))
    }
}

impl DocumentStore for DirStore {
    async fn put(&mut self, collection: &str, id: &str, document: serde_json::Value) -> Result<()> {
        let path = self.document_path(collection, id);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!("failed to create collection directory {}", parent.display())
            })?;
        }

        let body = serde_json::to_vec_pretty(&document)
            .with_context(|| format!("failed to serialize document '{collection}/{id}'"))?;
        tokio::fs::write(&path, body)
            .await
            .with_context(|| format!("failed to write document to {}", path.display()))?;

        tracing::debug!("Wrote document {}/{} to {}", collection, id, path.display());
        Ok(())
    }
}
