//! Derived index-field construction and record enrichment.

use crate::config::IndexerConfig;
use crate::error::InvalidRecordError;
use crate::record::{EnrichedRecord, IndexFields, Record};

use super::normalize::normalize_key;
use super::tokenize::build_search_terms;

/// Builds the normalized filter keys for a record.
///
/// Fails fast when a required numeric field is missing or out of domain;
/// a record gets a complete index bundle or none at all. This never logs,
/// the caller decides how to surface the error.
pub fn build_indexes(record: &Record) -> Result<IndexFields, InvalidRecordError> {
    let rates = record
        .rates
        .ok_or_else(|| InvalidRecordError::MissingRates {
            id: record.id.clone(),
        })?;
    if rates.min < 0.0 || rates.min.is_nan() {
        return Err(InvalidRecordError::InvalidPrice {
            id: record.id.clone(),
            min: rates.min,
        });
    }

    let reviews = record
        .reviews
        .ok_or_else(|| InvalidRecordError::MissingReviews {
            id: record.id.clone(),
        })?;
    // NaN fails the range check as well
    if !(0.0..=5.0).contains(&reviews.avg_rating) {
        return Err(InvalidRecordError::RatingOutOfRange {
            id: record.id.clone(),
            avg_rating: reviews.avg_rating,
        });
    }

    Ok(IndexFields {
        area_index: normalize_key(&record.location),
        amenity_index: record.amenities.iter().map(|a| normalize_key(a)).collect(),
        price_index: rates.min,
        rating_index: reviews.avg_rating,
    })
}

/// Derives the full storage document for a record: search terms plus filter
/// keys. Pure and idempotent; identical input always yields the identical
/// document.
pub fn enrich(record: Record, config: &IndexerConfig) -> Result<EnrichedRecord, InvalidRecordError> {
    let indexes = build_indexes(&record)?;
    let search_terms = build_search_terms(&record, config);
    Ok(EnrichedRecord {
        record,
        search_terms,
        indexes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{PriceRange, Rating};
    use assert2::check;
    use rstest::rstest;

    fn valid_record() -> Record {
        Record {
            id: "beach-club".to_string(),
            name: "Disney's Beach Club Resort".to_string(),
            location: "EPCOT Resort Area".to_string(),
            description: None,
            theme: None,
            amenities: vec!["Pool".to_string(), "Spa".to_string(), "Gym".to_string()],
            promotional_tags: vec![],
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

    #[test]
    fn builds_all_four_indexes() {
        let indexes = build_indexes(&valid_record()).unwrap();
        check!(indexes.area_index == "epcot_resort_area");
        check!(indexes.amenity_index == vec!["pool".to_string(), "spa".to_string(), "gym".to_string()]);
        check!(indexes.price_index == 613.0);
        check!(indexes.rating_index == 4.6);
    }

    #[test]
    fn amenity_index_preserves_order_and_length() {
        let record = valid_record();
        let indexes = build_indexes(&record).unwrap();
        check!(indexes.amenity_index.len() == record.amenities.len());
        for (amenity, key) in record.amenities.iter().zip(&indexes.amenity_index) {
            check!(*key == super::normalize_key(amenity));
        }
    }

    #[test]
    fn missing_rates_rejected() {
        let mut record = valid_record();
        record.rates = None;
        let err = build_indexes(&record).unwrap_err();
        check!(err == InvalidRecordError::MissingRates { id: "beach-club".to_string() });
    }

    #[test]
    fn missing_reviews_rejected() {
        let mut record = valid_record();
        record.reviews = None;
        let err = build_indexes(&record).unwrap_err();
        check!(err == InvalidRecordError::MissingReviews { id: "beach-club".to_string() });
    }

    #[rstest]
    #[case(-10.0)]
    #[case(-0.01)]
    #[case(f64::NAN)]
    fn invalid_minimum_price_rejected(#[case] min: f64) {
        let mut record = valid_record();
        record.rates = Some(PriceRange { min, max: 100.0 });
        check!(matches!(
            build_indexes(&record),
            Err(InvalidRecordError::InvalidPrice { .. })
        ));
    }

    #[rstest]
    #[case(5.5)]
    #[case(-0.1)]
    #[case(f64::NAN)]
    fn out_of_range_rating_rejected(#[case] avg_rating: f64) {
        let mut record = valid_record();
        record.reviews = Some(Rating {
            avg_rating,
            review_count: 10,
        });
        check!(matches!(
            build_indexes(&record),
            Err(InvalidRecordError::RatingOutOfRange { .. })
        ));
    }

    #[rstest]
    #[case(0.0)]
    #[case(5.0)]
    fn rating_bounds_are_inclusive(#[case] avg_rating: f64) {
        let mut record = valid_record();
        record.reviews = Some(Rating {
            avg_rating,
            review_count: 10,
        });
        check!(build_indexes(&record).is_ok());
    }

    #[test]
    fn zero_price_is_valid() {
        let mut record = valid_record();
        record.rates = Some(PriceRange { min: 0.0, max: 0.0 });
        check!(build_indexes(&record).unwrap().price_index == 0.0);
    }

    #[test]
    fn enrich_is_idempotent() {
        let config = IndexerConfig::default();
        let a = enrich(valid_record(), &config).unwrap();
        let b = enrich(valid_record(), &config).unwrap();
        check!(a == b);
    }
}
