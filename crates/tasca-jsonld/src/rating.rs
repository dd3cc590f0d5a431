//! Rating aggregation and scale conversion.
//!
//! Reviews are scored 0-10 per category (food, service, ambience, value).
//! schema.org `Rating` objects use a 1-5 scale:
//!
//! ```text
//! overall_10  = (food + service + ambience + value) / 4
//! rating_5    = round_1dp(overall_10 * 0.5)
//! ```
//!
//! The divisor is fixed at 4, so a missing category counts as zero and pulls
//! the average down. Out-of-range and NaN scores pass through unchanged.

use crate::object::SchemaObject;
use tasca_types::{RatingCategory, Ratings, Review};
use tracing::debug;

/// Top of the internal review scale.
pub const INTERNAL_SCALE: f64 = 10.0;
/// Top of the schema.org scale.
pub const SCHEMA_SCALE: f64 = 5.0;
/// `bestRating` on every emitted rating.
pub const BEST_RATING: u8 = 5;
/// `worstRating` on every emitted rating.
pub const WORST_RATING: u8 = 1;

const CATEGORY_COUNT: f64 = 4.0;

/// Overall score on the 0-10 scale.
///
/// An explicit `overall` wins; otherwise the four categories are averaged
/// with absent ones counted as zero.
pub fn overall(ratings: &Ratings) -> f64 {
    if let Some(overall) = ratings.overall {
        return overall;
    }

    let missing = ratings.missing_categories();
    if !missing.is_empty() {
        debug!(
            missing = ?missing.iter().map(RatingCategory::as_str).collect::<Vec<_>>(),
            "averaging ratings with missing categories counted as zero"
        );
    }

    let sum: f64 = RatingCategory::ALL
        .into_iter()
        .map(|c| ratings.get(c).unwrap_or(0.0))
        .sum();
    sum / CATEGORY_COUNT
}

/// Convert a 0-10 score to the 1-5 schema.org scale, one decimal place.
pub fn to_schema_scale(overall: f64) -> f64 {
    // Multiplying by 0.5 is exact in binary floating point, so the only
    // rounding happens in round_one_decimal.
    round_one_decimal(overall * (SCHEMA_SCALE / INTERNAL_SCALE))
}

/// Round to one decimal place, halves away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Schema.org rating value for a set of sub-ratings.
pub fn schema_rating(ratings: &Ratings) -> f64 {
    to_schema_scale(overall(ratings))
}

/// `Rating` node with the fixed 1-5 bounds.
pub fn rating_object(value: f64) -> SchemaObject {
    SchemaObject::new("Rating")
        .with("ratingValue", value)
        .with("bestRating", BEST_RATING)
        .with("worstRating", WORST_RATING)
}

/// `AggregateRating` over a venue's reviews, or `None` when there are none.
///
/// The reviews' 0-10 overall scores are averaged first and converted once,
/// so per-review rounding does not accumulate.
pub fn aggregate_rating(reviews: &[Review]) -> Option<SchemaObject> {
    if reviews.is_empty() {
        return None;
    }

    let total: f64 = reviews.iter().map(|r| overall(&r.ratings)).sum();
    let mean = total / reviews.len() as f64;

    Some(
        SchemaObject::new("AggregateRating")
            .with("ratingValue", to_schema_scale(mean))
            .with("reviewCount", reviews.len())
            .with("bestRating", BEST_RATING)
            .with("worstRating", WORST_RATING),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_overall_is_mean_of_four() {
        let ratings = Ratings::new(9.0, 8.0, 9.0, 7.0);
        assert_eq!(overall(&ratings), 8.25);
    }

    #[test]
    fn test_schema_rating_rounds_to_one_decimal() {
        let ratings = Ratings::new(9.0, 8.0, 9.0, 7.0);
        // 8.25 / 10 * 5 = 4.125
        assert_eq!(schema_rating(&ratings), 4.1);
    }

    #[test]
    fn test_explicit_overall_wins() {
        let ratings = Ratings::new(2.0, 2.0, 2.0, 2.0).with_overall(9.0);
        assert_eq!(overall(&ratings), 9.0);
        assert_eq!(schema_rating(&ratings), 4.5);
    }

    #[test]
    fn test_missing_categories_count_as_zero() {
        let ratings = Ratings {
            food: Some(8.0),
            service: Some(8.0),
            ambience: Some(8.0),
            ..Ratings::default()
        };
        assert_eq!(overall(&ratings), 6.0);
        assert_eq!(schema_rating(&Ratings::default()), 0.0);
    }

    #[test]
    fn test_half_boundary_rounds_away_from_zero() {
        // 7.5 → 3.75 exactly → 3.8
        assert_eq!(to_schema_scale(7.5), 3.8);
        // 8.5 → 4.25 exactly → 4.3
        assert_eq!(to_schema_scale(8.5), 4.3);
        assert_eq!(to_schema_scale(10.0), 5.0);
    }

    #[test]
    fn test_out_of_range_passes_through() {
        assert_eq!(to_schema_scale(14.0), 7.0);
        assert_eq!(to_schema_scale(-2.0), -1.0);
    }

    #[test]
    fn test_nan_propagates_to_null_rating_value() {
        let ratings = Ratings {
            food: Some(f64::NAN),
            ..Ratings::new(8.0, 8.0, 8.0, 8.0)
        };
        assert!(overall(&ratings).is_nan());
        assert!(schema_rating(&ratings).is_nan());

        let rating = rating_object(schema_rating(&ratings));
        assert_eq!(rating.get("ratingValue"), Some(&serde_json::Value::Null));
        assert_eq!(
            serde_json::to_string(&rating).unwrap(),
            r#"{"@type":"Rating","ratingValue":null,"bestRating":5,"worstRating":1}"#
        );
    }

    #[test]
    fn test_rating_object_bounds_are_fixed() {
        let rating = rating_object(4.1);
        assert_eq!(rating.schema_type(), Some("Rating"));
        assert_eq!(rating.get("ratingValue"), Some(&json!(4.1)));
        assert_eq!(rating.get("bestRating"), Some(&json!(5)));
        assert_eq!(rating.get("worstRating"), Some(&json!(1)));
    }

    #[test]
    fn test_aggregate_rating() {
        let mut a = Review::new("a", "A");
        a.ratings = Ratings::new(9.0, 8.0, 9.0, 7.0); // 8.25
        let mut b = Review::new("b", "B");
        b.ratings = Ratings::new(7.0, 7.0, 7.0, 7.0); // 7.0

        let aggregate = aggregate_rating(&[a, b]).unwrap();
        // mean 7.625 → 3.8125 → 3.8
        assert_eq!(aggregate.get("ratingValue"), Some(&json!(3.8)));
        assert_eq!(aggregate.get("reviewCount"), Some(&json!(2)));
        assert!(aggregate_rating(&[]).is_none());
    }
}
