//! Error handling types and utilities.

/// A specialized Result type for resort-indexer operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()`
/// and `.with_context()` methods in the driver and store layers.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a record's required numeric fields are missing or
/// out of domain.
///
/// Never retried automatically: the data cannot become valid by retrying,
/// the source record has to be fixed upstream.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidRecordError {
    /// No price range on a record that must carry one.
    #[error("record '{id}' has no price range")]
    MissingRates { id: String },
    /// Minimum price below zero (or not a number).
    #[error("record '{id}' has an invalid minimum price ({min})")]
    InvalidPrice { id: String, min: f64 },
    /// No review summary on a record that must carry one.
    #[error("record '{id}' has no review summary")]
    MissingReviews { id: String },
    /// Average rating outside the 0–5 scale.
    #[error("record '{id}' has an average rating outside [0, 5] ({avg_rating})")]
    RatingOutOfRange { id: String, avg_rating: f64 },
}
