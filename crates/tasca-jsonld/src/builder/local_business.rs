//! LocalBusiness builder - venues.

use super::SchemaBuilder;
use crate::object::{present, SchemaObject};
use crate::rating::aggregate_rating;
use crate::url::{anchor, Fragment};
use tasca_types::{Review, Venue};
use tracing::debug;

/// `@type` for venues without a `schemaType`.
pub const DEFAULT_BUSINESS_TYPE: &str = "LocalBusiness";

/// Every venue on the site is in Spain.
const ADDRESS_COUNTRY: &str = "ES";

impl SchemaBuilder {
    /// Build the business node for a venue.
    ///
    /// `@id` and `url` need the venue's canonical URL and are left out when
    /// either the venue or its city has no slug. `geo`, `image`,
    /// `openingHours` and `sameAs` are left out when empty.
    pub fn local_business(&self, venue: &Venue) -> SchemaObject {
        let business_type = venue
            .schema_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_BUSINESS_TYPE);

        let url = self.urls.venue_url(venue);
        let mut schema = SchemaObject::document(business_type);

        match &url {
            Some(url) => schema = schema.with_id(anchor(url, Fragment::Business)),
            None => debug!(
                venue_id = %venue.id,
                "venue has no canonical url, omitting @id and url"
            ),
        }

        schema = schema
            .with("name", venue.title.as_str())
            .with_opt("description", present(&venue.description))
            .with_opt("url", url)
            .with_opt("telephone", present(&venue.phone))
            .with_opt("priceRange", present(&venue.price_range))
            .with("address", postal_address(venue));

        let images: Vec<&str> = venue.images.iter().filter_map(|i| i.url()).collect();
        if !images.is_empty() {
            schema = schema.with("image", images);
        }

        if let Some(geo) = venue.geo {
            schema = schema.with(
                "geo",
                SchemaObject::new("GeoCoordinates")
                    .with("latitude", geo.lat)
                    .with("longitude", geo.lng),
            );
        }

        if !venue.opening_hours.is_empty() {
            schema = schema.with("openingHours", venue.opening_hours.clone());
        }

        let same_as = same_as(venue);
        if !same_as.is_empty() {
            schema = schema.with("sameAs", same_as);
        }

        schema
    }

    /// [`local_business`](Self::local_business) plus an `aggregateRating`
    /// over the venue's reviews (left out when there are none).
    pub fn local_business_with_reviews(&self, venue: &Venue, reviews: &[Review]) -> SchemaObject {
        let schema = self.local_business(venue);
        match aggregate_rating(reviews) {
            Some(rating) => schema.with("aggregateRating", rating),
            None => schema,
        }
    }
}

fn postal_address(venue: &Venue) -> SchemaObject {
    let city = venue.city.as_ref();
    SchemaObject::new("PostalAddress")
        .with_opt("streetAddress", present(&venue.address))
        .with_opt("postalCode", present(&venue.postal_code))
        .with_opt(
            "addressLocality",
            city.map(|c| c.title.as_str()).filter(|t| !t.is_empty()),
        )
        .with_opt("addressRegion", city.and_then(|c| present(&c.region)))
        .with("addressCountry", ADDRESS_COUNTRY)
}

/// Social profiles and website, dropping anything missing or empty.
fn same_as(venue: &Venue) -> Vec<String> {
    let social = venue.social.clone().unwrap_or_default();
    [
        social.instagram,
        social.facebook,
        social.tiktok,
        social.maps,
        venue.website.clone(),
    ]
    .into_iter()
    .flatten()
    .filter(|link| !link.is_empty())
    .collect()
}
