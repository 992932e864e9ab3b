//! Indexer tunables.

use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;

use crate::error::Result;

/// Tunables for search-term extraction.
///
/// The term cap bounds per-document storage size in the target store. It is
/// a deployment knob, not part of the indexing contract; truncation is always
/// a stable cut of the first-seen token order.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexerConfig {
    /// Maximum number of search terms kept per record.
    pub max_search_terms: usize,
    /// Minimum token length; shorter tokens are discarded.
    pub min_token_len: usize,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            max_search_terms: 40,
            min_token_len: 3,
        }
    }
}

impl IndexerConfig {
    /// Loads tunables from a TOML file. Missing keys fall back to defaults,
    /// unknown keys are rejected.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse config at {}", path.display()))?;
        Ok(config)
    }
}
