//! Page-level JSON-LD assembly.
//!
//! Each page kind picks its builders and merges them with
//! [`combine`](tasca_jsonld::combine):
//!
//! ```text
//! home    WebSite + Organization
//! city    BreadcrumbList               Inicio > {city}
//! venue   LocalBusiness (+ rating)     Inicio > {city} > {venue}
//!         + BreadcrumbList + FAQPage?
//! review  Review + BreadcrumbList      Inicio > {city} > {venue} > Reseña
//! post    BlogPosting + BreadcrumbList Inicio > Blog > {title}
//! ```
//!
//! Crumbs whose URL cannot be derived (missing slug) are left out of the
//! trail rather than pointing at a guessed address.

use crate::error::TascaError;
use crate::sanity::ContentSource;
use serde::{Deserialize, Serialize};
use tasca_jsonld::{combine, faq_page, SchemaBuilder, SchemaObject};
use tasca_types::{BreadcrumbItem, City, FaqItem, Post, Review, Venue};
use tracing::{debug, info};

pub const HOME_LABEL: &str = "Inicio";
pub const BLOG_LABEL: &str = "Blog";
pub const REVIEW_LABEL: &str = "Reseña";

// ============================================================================
// TRAILS
// ============================================================================

fn push_crumb(trail: &mut Vec<BreadcrumbItem>, name: &str, url: Option<String>) {
    match url {
        Some(url) => trail.push(BreadcrumbItem::new(name, url)),
        None => debug!(crumb = name, "Breadcrumb skipped: no URL"),
    }
}

fn home_crumb() -> BreadcrumbItem {
    BreadcrumbItem::new(HOME_LABEL, "/")
}

/// `Inicio > {city}`
pub fn city_trail(builder: &SchemaBuilder, city: &City) -> Vec<BreadcrumbItem> {
    let mut trail = vec![home_crumb()];
    push_crumb(&mut trail, &city.title, builder.urls().city_url(city));
    trail
}

/// `Inicio > {city} > {venue}`
pub fn venue_trail(builder: &SchemaBuilder, venue: &Venue) -> Vec<BreadcrumbItem> {
    let mut trail = match &venue.city {
        Some(city) => city_trail(builder, city),
        None => vec![home_crumb()],
    };
    push_crumb(&mut trail, &venue.title, builder.urls().venue_url(venue));
    trail
}

/// `Inicio > {city} > {venue} > Reseña`
pub fn review_trail(builder: &SchemaBuilder, review: &Review, venue: &Venue) -> Vec<BreadcrumbItem> {
    let mut trail = venue_trail(builder, venue);
    push_crumb(
        &mut trail,
        REVIEW_LABEL,
        builder.urls().review_url(review, venue),
    );
    trail
}

/// `Inicio > Blog > {title}`
pub fn post_trail(builder: &SchemaBuilder, post: &Post) -> Vec<BreadcrumbItem> {
    let mut trail = vec![home_crumb(), BreadcrumbItem::new(BLOG_LABEL, "/blog")];
    push_crumb(&mut trail, &post.title, builder.urls().post_url(post));
    trail
}

// ============================================================================
// PAGES
// ============================================================================

pub fn home_page(builder: &SchemaBuilder) -> Option<SchemaObject> {
    combine([Some(builder.website()), Some(builder.organization())])
}

pub fn city_page(builder: &SchemaBuilder, city: &City) -> Option<SchemaObject> {
    combine([Some(builder.breadcrumbs(&city_trail(builder, city)))])
}

pub fn venue_page(
    builder: &SchemaBuilder,
    venue: &Venue,
    reviews: &[Review],
    faqs: Option<&[FaqItem]>,
) -> Option<SchemaObject> {
    combine([
        Some(builder.local_business_with_reviews(venue, reviews)),
        Some(builder.breadcrumbs(&venue_trail(builder, venue))),
        faq_page(faqs),
    ])
}

pub fn review_page(builder: &SchemaBuilder, review: &Review, venue: &Venue) -> Option<SchemaObject> {
    combine([
        Some(builder.review(review, venue)),
        Some(builder.breadcrumbs(&review_trail(builder, review, venue))),
    ])
}

pub fn post_page(builder: &SchemaBuilder, post: &Post) -> Option<SchemaObject> {
    combine([
        Some(builder.article(post)),
        Some(builder.breadcrumbs(&post_trail(builder, post))),
    ])
}

// ============================================================================
// BUNDLES
// ============================================================================

/// Everything one page needs, tagged by page kind.
///
/// ```json
/// { "page": "venue", "venue": { ... }, "reviews": [ ... ], "faqs": [ ... ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "camelCase")]
pub enum PageBundle {
    Home,
    City {
        city: City,
    },
    Venue {
        venue: Venue,
        #[serde(default)]
        reviews: Vec<Review>,
        /// Falls back to the venue's own `faqs`.
        #[serde(default)]
        faqs: Option<Vec<FaqItem>>,
    },
    Review {
        review: Review,
        /// Falls back to the review's dereferenced `venue`.
        #[serde(default)]
        venue: Option<Venue>,
    },
    Post {
        post: Post,
    },
}

impl PageBundle {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::City { .. } => "city",
            Self::Venue { .. } => "venue",
            Self::Review { .. } => "review",
            Self::Post { .. } => "post",
        }
    }

    /// Build the page's JSON-LD document.
    pub fn render(&self, builder: &SchemaBuilder) -> Result<Option<SchemaObject>, TascaError> {
        let document = match self {
            Self::Home => home_page(builder),
            Self::City { city } => city_page(builder, city),
            Self::Venue {
                venue,
                reviews,
                faqs,
            } => venue_page(
                builder,
                venue,
                reviews,
                faqs.as_deref().or(Some(venue.faqs.as_slice())),
            ),
            Self::Review { review, venue } => {
                let venue = venue
                    .as_ref()
                    .or(review.venue.as_deref())
                    .ok_or_else(|| TascaError::MissingVenue {
                        review_id: review.id.clone(),
                    })?;
                review_page(builder, review, venue)
            }
            Self::Post { post } => post_page(builder, post),
        };
        Ok(document)
    }
}

// ============================================================================
// LOADING
// ============================================================================

/// Venue page content: the venue, its reviews and its FAQs.
pub async fn load_venue<S>(source: &S, city: &str, slug: &str) -> Result<PageBundle, TascaError>
where
    S: ContentSource + ?Sized,
{
    let venue = source
        .venue(city, slug)
        .await?
        .ok_or_else(|| TascaError::NotFound {
            kind: "venue",
            slug: format!("{}/{}", city, slug),
        })?;
    let reviews = source.reviews_for_venue(&venue.id).await?;
    let faqs = (!venue.faqs.is_empty()).then(|| venue.faqs.clone());

    info!(
        venue = %venue.id,
        reviews = reviews.len(),
        faqs = venue.faqs.len(),
        "Loaded venue page"
    );
    Ok(PageBundle::Venue {
        venue,
        reviews,
        faqs,
    })
}

pub async fn load_review<S>(source: &S, slug: &str) -> Result<PageBundle, TascaError>
where
    S: ContentSource + ?Sized,
{
    let review = source
        .review(slug)
        .await?
        .ok_or_else(|| TascaError::NotFound {
            kind: "review",
            slug: slug.to_string(),
        })?;

    info!(review = %review.id, "Loaded review page");
    Ok(PageBundle::Review {
        review,
        venue: None,
    })
}

pub async fn load_post<S>(source: &S, slug: &str) -> Result<PageBundle, TascaError>
where
    S: ContentSource + ?Sized,
{
    let post = source.post(slug).await?.ok_or_else(|| TascaError::NotFound {
        kind: "post",
        slug: slug.to_string(),
    })?;

    info!(post = %post.id, "Loaded post page");
    Ok(PageBundle::Post { post })
}
