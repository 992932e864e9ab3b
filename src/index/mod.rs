//! The record indexer: search-term extraction and filter-key derivation.
//!
//! Everything here is pure, synchronous, and side-effect free. The batch
//! driver calls into this module once per record; these functions never log
//! and never write, so they are safe to call concurrently across records.

// Module declarations
pub(crate) mod derive;
pub(crate) mod normalize;
pub(crate) mod tokenize;

// Public re-exports (used via lib.rs)
pub use derive::{build_indexes, enrich};
pub use normalize::normalize_key;
pub use tokenize::build_search_terms;
