//! Document-store abstraction the migration driver writes through.
//!
//! The store is opaque to the indexer: anything with a
//! `put(collection, id, document)` primitive works. The concrete handle is
//! injected into the driver rather than living in module-level state.

// Module declarations
pub(crate) mod dir;
pub(crate) mod memory;

// Public re-exports (used via lib.rs)
pub use dir::DirStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// A key-value document sink, addressed by collection name and record id.
#[allow(async_fn_in_trait)] // in-crate implementors only, no Send bound needed
pub trait DocumentStore {
    /// Writes a single document. A failure affects only that document; the
    /// driver logs it and continues with the rest of the batch.
    async fn put(&mut self, collection: &str, id: &str, document: serde_json::Value) -> Result<()>;
}
