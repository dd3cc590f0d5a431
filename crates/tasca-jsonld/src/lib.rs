//! tasca JSON-LD - schema.org structured data for venue, review and post pages.
//!
//! This crate turns CMS content into the JSON-LD documents embedded in each
//! page's `<script type="application/ld+json">` tag:
//! - `UrlComposer` - canonical page URLs and `#fragment` identifiers
//! - `rating` - overall ratings and the 10 → 5 scale conversion
//! - `SchemaBuilder` - one builder per schema.org entity kind
//! - `combine` - merge several schemas into one document (`@graph`)
//! - `validate` - pre-render checks on a finished document
//!
//! # Architecture
//!
//! ```text
//! SiteConfig ──► SchemaBuilder ──┬─► local_business(venue)        LocalBusiness
//!                 │              ├─► review(review, venue)        Review ─► itemReviewed: LocalBusiness
//!                 │              ├─► article(post)                BlogPosting
//!                 │              ├─► breadcrumbs(items)           BreadcrumbList
//!                 │              ├─► website() / organization()   WebSite / Organization
//!                 │              └─► faq_page(items)              FAQPage | None
//!                 └── UrlComposer
//!
//! combine([Some(a), None, Some(b)]) ──► { "@context", "@graph": [a, b] }
//! ```
//!
//! Every builder is deterministic: the same content and the same site
//! configuration always produce identical output. Nothing here performs I/O.
//!
//! # Example
//!
//! ```
//! use tasca_jsonld::{combine, SchemaBuilder};
//! use tasca_types::{City, SiteConfig, Slug, Venue};
//!
//! let builder = SchemaBuilder::new(SiteConfig::new(
//!     "Tasca",
//!     "Reseñas de restaurantes",
//!     "https://tasca.es",
//! ));
//!
//! let mut venue = Venue::new("venue-1", "Casa Pepe");
//! venue.slug = Some(Slug::new("casa-pepe"));
//! venue.city = Some(City::new("Madrid", "madrid"));
//!
//! let business = builder.local_business(&venue);
//! assert_eq!(business.schema_type(), Some("LocalBusiness"));
//! assert_eq!(business.id(), Some("https://tasca.es/madrid/casa-pepe#business"));
//!
//! let document = combine([Some(business), Some(builder.website())]).unwrap();
//! assert!(document.get("@graph").is_some());
//! ```

pub mod builder;
mod error;
mod graph;
mod object;
pub mod rating;
mod url;
mod validate;

// Re-exports
pub use builder::{faq_page, SchemaBuilder};
pub use error::ValidationError;
pub use graph::combine;
pub use object::{SchemaObject, SCHEMA_CONTEXT};
pub use url::{anchor, Fragment, UrlComposer};
pub use validate::{validate, ValidationResult};
