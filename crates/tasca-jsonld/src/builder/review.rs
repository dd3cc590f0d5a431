//! Review builder.

use super::SchemaBuilder;
use crate::object::{present, SchemaObject};
use crate::rating::{rating_object, schema_rating};
use crate::url::{anchor, Fragment};
use tasca_types::{Review, Venue};
use tracing::debug;

impl SchemaBuilder {
    /// Build the `Review` node for a review of `venue`.
    ///
    /// `itemReviewed` is the venue's [`local_business`](Self::local_business)
    /// node as-is. `datePublished` is copied verbatim from the CMS.
    pub fn review(&self, review: &Review, venue: &Venue) -> SchemaObject {
        let url = self.urls.review_url(review, venue);
        let mut schema = SchemaObject::document("Review");

        match &url {
            Some(url) => schema = schema.with_id(anchor(url, Fragment::Review)),
            None => debug!(
                review_id = %review.id,
                venue_id = %venue.id,
                "review has no canonical url, omitting @id and url"
            ),
        }

        let author = self.person(
            present(&review.author),
            present(&review.author_avatar),
        );

        schema
            .with("name", review.title.as_str())
            .with_opt("url", url)
            .with_opt("reviewBody", present(&review.tldr))
            .with("author", author)
            .with_opt("datePublished", review.published_at.as_deref())
            .with("reviewRating", rating_object(schema_rating(&review.ratings)))
            .with("itemReviewed", self.local_business(venue))
            .with("isPartOf", self.website_stub())
    }
}
