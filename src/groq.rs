//! GROQ queries used by the site's pages.
//!
//! Projections dereference everything the schema builders need
//! (`city->`, `venue->`, `asset->url`), so results deserialize straight into
//! `tasca_types`. Values always travel as `$params`, never spliced into the
//! query text.

use serde_json::Value;
use std::collections::BTreeMap;

/// Document types stored in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocType {
    Venue,
    Review,
    Post,
    City,
    Category,
    Guide,
}

impl DocType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Venue => "venue",
            Self::Review => "review",
            Self::Post => "post",
            Self::City => "city",
            Self::Category => "category",
            Self::Guide => "guide",
        }
    }
}

// ============================================================================
// PROJECTIONS
// ============================================================================

/// Image asset reduced to its CDN URL.
pub const IMAGE_PROJECTION: &str = r#"{ "url": asset->url, alt }"#;

/// Dereferenced city.
pub const CITY_PROJECTION: &str = "{ title, slug, region }";

/// Question and answer pair.
pub const FAQ_PROJECTION: &str = "{ question, answer }";

/// Fields of a venue document. Arrays are coalesced so absent ones decode
/// as empty rather than `null`.
pub fn venue_fields() -> String {
    format!(
        r#"_id, title, slug, description, address, postalCode, geo, phone, website, social, schemaType, priceRange, "openingHours": coalesce(openingHours, []), "city": city->{city}, "images": coalesce(images[]{image}, []), "faqs": coalesce(faqs[]{faq}, [])"#,
        city = CITY_PROJECTION,
        image = IMAGE_PROJECTION,
        faq = FAQ_PROJECTION,
    )
}

/// Fields of a review document, with its venue dereferenced.
pub fn review_fields() -> String {
    format!(
        r#"_id, title, slug, author, "authorAvatar": authorAvatar.asset->url, publishedAt, visitDate, ratings, tldr, "venue": venue->{{ {venue} }}"#,
        venue = venue_fields(),
    )
}

/// Fields of a post document.
pub fn post_fields() -> String {
    format!(
        r#"_id, _updatedAt, title, slug, excerpt, author, publishedAt, tags, "cover": cover{image}"#,
        image = IMAGE_PROJECTION,
    )
}

// ============================================================================
// QUERIES
// ============================================================================

/// A query plus its parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GroqQuery {
    pub query: String,
    pub params: BTreeMap<String, Value>,
}

impl GroqQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            params: BTreeMap::new(),
        }
    }

    /// Bind `$name`.
    pub fn param(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.params.insert(name.to_string(), value.into());
        self
    }
}

/// Venue by city and venue slug. `$city`, `$slug`.
pub fn venue_by_slug(city: &str, slug: &str) -> GroqQuery {
    GroqQuery::new(format!(
        r#"*[_type == "venue" && slug.current == $slug && city->slug.current == $city][0]{{ {} }}"#,
        venue_fields()
    ))
    .param("city", city)
    .param("slug", slug)
}

/// All venues in a city, alphabetical. `$city`.
pub fn venues_in_city(city: &str) -> GroqQuery {
    GroqQuery::new(format!(
        r#"*[_type == "venue" && city->slug.current == $city] | order(title asc){{ {} }}"#,
        venue_fields()
    ))
    .param("city", city)
}

/// Reviews of one venue, newest first. `$venueId`.
pub fn reviews_for_venue(venue_id: &str) -> GroqQuery {
    GroqQuery::new(format!(
        r#"*[_type == "review" && venue._ref == $venueId] | order(publishedAt desc){{ {} }}"#,
        review_fields()
    ))
    .param("venueId", venue_id)
}

/// Single review by slug. `$slug`.
pub fn review_by_slug(slug: &str) -> GroqQuery {
    GroqQuery::new(format!(
        r#"*[_type == "review" && slug.current == $slug][0]{{ {} }}"#,
        review_fields()
    ))
    .param("slug", slug)
}

/// Cities with their venue counts.
pub fn cities() -> GroqQuery {
    GroqQuery::new(
        r#"*[_type == "city"] | order(title asc){ title, slug, region, "venueCount": count(*[_type == "venue" && references(^._id)]) }"#,
    )
}

/// Single post by slug. `$slug`.
pub fn post_by_slug(slug: &str) -> GroqQuery {
    GroqQuery::new(format!(
        r#"*[_type == "post" && slug.current == $slug][0]{{ {} }}"#,
        post_fields()
    ))
    .param("slug", slug)
}

/// Most recent posts.
pub fn latest_posts(limit: usize) -> GroqQuery {
    GroqQuery::new(format!(
        r#"*[_type == "post" && defined(publishedAt)] | order(publishedAt desc)[0...{}]{{ {} }}"#,
        limit,
        post_fields()
    ))
}

/// Number of documents of one type.
pub fn count(doc_type: DocType) -> GroqQuery {
    GroqQuery::new(format!(r#"count(*[_type == "{}"])"#, doc_type.as_str()))
}

/// Prefix text search over venues, reviews and posts. `$q`.
pub fn search(term: &str) -> GroqQuery {
    GroqQuery::new(
        r#"*[_type in ["venue", "review", "post"] && (title match $q || description match $q || tldr match $q || excerpt match $q)] | order(_updatedAt desc)[0...20]{ _id, _type, title, slug, "city": city->slug.current }"#,
    )
    .param("q", search_pattern(term))
}

/// `match` pattern for a user search term: words kept, trailing wildcard.
pub fn search_pattern(term: &str) -> String {
    let words: Vec<&str> = term.split_whitespace().collect();
    if words.is_empty() {
        return String::new();
    }
    format!("{}*", words.join(" "))
}
