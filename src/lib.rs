//! tasca - structured data and content plumbing for a restaurant-review site
//!
//! The site's pages (city listings, venue detail, review detail, blog posts)
//! are rendered from Sanity content. This crate is the Rust side of that
//! pipeline:
//!
//! ```text
//! env ──► config ──► SiteConfig ─────────────────────┐
//!                    SanityConfig ──► SanityClient     │
//!                                        │ groq         ▼
//!                                        ▼       SchemaBuilder (tasca-jsonld)
//!                              Venue / Review / Post ──► pages ──► script_tag
//! ```
//!
//! - [`config`] - site and CMS configuration from the environment
//! - [`groq`] - GROQ queries used by the pages
//! - [`sanity`] - HTTP client for the Sanity query API
//! - [`pages`] - per-page JSON-LD assembly (breadcrumb trails, graphs)
//! - [`script`] - `<script type="application/ld+json">` rendering

pub mod config;
pub mod error;
pub mod groq;
pub mod pages;
pub mod sanity;
pub mod script;

pub use config::{AppConfig, SanityConfig};
pub use error::TascaError;
pub use pages::PageBundle;
pub use sanity::{ContentSource, SanityClient};
pub use script::{script_tag, script_tag_pretty};

// Re-export the content and schema crates so binaries need one import path.
pub use tasca_jsonld as jsonld;
pub use tasca_types as types;
