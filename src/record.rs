//! Authored record schema and the enriched storage document.

use serde::{Deserialize, Serialize};

/// Nightly price range for a facility, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Aggregated guest-review summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub avg_rating: f64,
    pub review_count: u64,
}

/// A single facility/resort entity as authored in the source datasets.
///
/// Field names follow the camelCase JSON the datasets were authored with,
/// plus the legacy `resortId` alias for the external key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Stable external key, unique within the collection.
    #[serde(alias = "resortId")]
    pub id: String,
    pub name: String,
    /// Free-text location label, e.g. "EPCOT Resort Area".
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub promotional_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rates: Option<PriceRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Rating>,
}

/// The normalized filter keys derived by [`crate::index::build_indexes`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexFields {
    pub area_index: String,
    /// Parallel to the source amenity list, one normalized key per amenity.
    pub amenity_index: Vec<String>,
    pub price_index: f64,
    pub rating_index: f64,
}

/// An authored record plus its derived search/filter fields, ready to be
/// handed to the document store. Derived fields are computed, never authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub record: Record,
    pub search_terms: Vec<String>,
    #[serde(flatten)]
    pub indexes: IndexFields,
}
