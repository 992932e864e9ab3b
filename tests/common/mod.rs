//! Shared test fixtures for integration tests.

use resort_indexer::record::{PriceRange, Rating, Record};
use rstest::fixture;

/// The canonical valid record used across tests: Disney's Beach Club Resort.
#[allow(dead_code)] // Used across different integration test crates
pub fn beach_club() -> Record {
    Record {
        id: "beach-club".to_string(),
        name: "Disney's Beach Club Resort".to_string(),
        location: "EPCOT Resort Area".to_string(),
        description: Some("A New England-style beach retreat".to_string()),
        theme: Some("Beach cottage".to_string()),
        amenities: vec!["Stormalong Bay Pool".to_string(), "Beach".to_string()],
        promotional_tags: vec!["Deluxe".to_string()],
        rates: Some(PriceRange {
            min: 613.0,
            max: 1450.0,
        }),
        reviews: Some(Rating {
            avg_rating: 4.6,
            review_count: 3800,
        }),
    }
}

/// A record `build_indexes` rejects: no price range at all.
#[allow(dead_code)] // Used across different integration test crates
pub fn record_without_rates(id: &str) -> Record {
    Record {
        rates: None,
        id: id.to_string(),
        ..beach_club()
    }
}

#[fixture]
#[allow(dead_code)] // Used across different integration test crates
pub fn valid_record() -> Record {
    beach_club()
}
