pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod index;
pub mod record;
pub mod store;

pub use config::IndexerConfig;
pub use error::{InvalidRecordError, Result};
pub use record::{EnrichedRecord, IndexFields, PriceRange, Rating, Record};
