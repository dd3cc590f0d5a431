//! Content types for tasca
//!
//! These are the documents the site reads from Sanity, already projected by
//! the GROQ queries: references are dereferenced (`city->`, `venue->`) and
//! image assets are reduced to their CDN URL.
//!
//! ## Rules
//!
//! 1. Field names follow the CMS (`camelCase`, `_id`, `_updatedAt`)
//! 2. Everything optional in the CMS is an `Option` here - nothing is
//!    validated on the way in
//! 3. Types are read-only snapshots; nothing in the workspace mutates them

pub mod post;
pub mod review;
pub mod site;
pub mod venue;

use serde::{Deserialize, Serialize};

pub use post::Post;
pub use review::{RatingCategory, Ratings, Review};
pub use site::SiteConfig;
pub use venue::{City, GeoPoint, Social, Venue};

// ============================================================================
// SHARED CMS SHAPES
// ============================================================================

/// Sanity slug object (`{ "_type": "slug", "current": "..." }`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    #[serde(default)]
    pub current: Option<String>,
}

impl Slug {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: Some(current.into()),
        }
    }

    /// The slug text, if present and non-empty.
    pub fn as_str(&self) -> Option<&str> {
        self.current.as_deref().filter(|s| !s.is_empty())
    }
}

/// Resolve an optional slug object down to its text.
pub fn slug_str(slug: &Option<Slug>) -> Option<&str> {
    slug.as_ref().and_then(Slug::as_str)
}

/// Image projected as `{ "url": asset->url, alt }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

impl ImageRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            alt: None,
        }
    }

    /// The asset URL, if present and non-empty.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|s| !s.is_empty())
    }
}

/// One question/answer pair. Lists of these become an FAQ page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

impl FaqItem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// One breadcrumb entry. `url` may be absolute or a site-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub name: String,
    pub url: String,
}

impl BreadcrumbItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}
