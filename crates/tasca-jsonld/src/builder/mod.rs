//! Schema builders that transform content types into schema.org nodes.
//!
//! One builder per entity kind, all hanging off [`SchemaBuilder`]:
//!
//! ```text
//! Venue ──► local_business ──► LocalBusiness (or venue.schemaType)
//! Review + Venue ──► review ──► Review { itemReviewed: LocalBusiness }
//! Post ──► article ──► BlogPosting
//! [BreadcrumbItem] ──► breadcrumbs ──► BreadcrumbList
//! SiteConfig ──► website / organization ──► WebSite / Organization
//! [FaqItem] ──► faq_page ──► FAQPage | None
//! ```
//!
//! Builders are deterministic: same input, same site config, same output.
//! Missing optional content leaves fields out; nothing is written as `null`.

mod article;
mod breadcrumb;
mod faq;
mod local_business;
mod review;
mod site;

pub use faq::faq_page;
pub use local_business::DEFAULT_BUSINESS_TYPE;

use crate::object::SchemaObject;
use crate::url::UrlComposer;
use tasca_types::SiteConfig;

/// Builds schema.org nodes for one site.
///
/// Holds only immutable configuration, so a single instance can be shared
/// across concurrent page renders.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    site: SiteConfig,
    urls: UrlComposer,
}

impl SchemaBuilder {
    pub fn new(site: SiteConfig) -> Self {
        let urls = UrlComposer::new(&site.url);
        Self { site, urls }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn urls(&self) -> &UrlComposer {
        &self.urls
    }

    /// `Person` node. Unattributed content is credited to the publication.
    fn person(&self, name: Option<&str>, image: Option<&str>) -> SchemaObject {
        SchemaObject::new("Person")
            .with("name", name.unwrap_or(self.site.name.as_str()))
            .with_opt("image", image)
    }

    /// Publication logo as an `ImageObject`, when configured.
    fn logo(&self) -> Option<SchemaObject> {
        self.site
            .logo
            .as_deref()
            .map(|logo| SchemaObject::new("ImageObject").with("url", logo))
    }

    /// `{ "@type": "WebSite", name, url }` stub used by `isPartOf`.
    fn website_stub(&self) -> SchemaObject {
        SchemaObject::new("WebSite")
            .with("name", self.site.name.as_str())
            .with("url", self.site.url.as_str())
    }
}
