//! In-memory store for tests and dry runs.

use std::collections::BTreeMap;

use super::DocumentStore;
use crate::error::Result;

/// Collects documents in memory, keyed by `(collection, id)`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: BTreeMap<(String, String), serde_json::Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Looks up a stored document.
    pub fn get(&self, collection: &str, id: &str) -> Option<&serde_json::Value> {
        self.documents
            .get(&(collection.to_string(), id.to_string()))
    }
}

impl DocumentStore for MemoryStore {
    async fn put(&mut self, collection: &str, id: &str, document: serde_json::Value) -> Result<()> {
        self.documents
            .insert((collection.to_string(), id.to_string()), document);
        Ok(())
    }
}
