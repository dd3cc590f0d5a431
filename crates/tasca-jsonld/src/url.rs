//! Canonical URL composition.
//!
//! Page URLs on the site are slug paths under the base URL:
//!
//! ```text
//! {base}/{city}                              city listing
//! {base}/{city}/{venue}                      venue detail
//! {base}/{city}/{venue}/review/{review}      review detail
//! {base}/blog/{post}                         blog post
//! {base}/buscar?q=...                        search
//! ```
//!
//! Slugs are not validated. Entity helpers return `None` when a required
//! slug is missing so callers can omit the dependent fields.

use tasca_types::{City, Post, Review, Venue};

/// Path segment between a venue and its reviews.
pub const REVIEW_SEGMENT: &str = "review";
/// Path segment for blog posts.
pub const BLOG_SEGMENT: &str = "blog";
/// Search page path.
pub const SEARCH_PATH: &str = "buscar";

/// `#fragment` suffixes used for `@id` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    Business,
    Review,
    Article,
    Website,
    Organization,
}

impl Fragment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Review => "review",
            Self::Article => "article",
            Self::Website => "website",
            Self::Organization => "organization",
        }
    }
}

/// `{url}#{fragment}`.
pub fn anchor(url: &str, fragment: Fragment) -> String {
    format!("{}#{}", url, fragment.as_str())
}

/// Builds absolute URLs from the site base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlComposer {
    base: String,
}

impl UrlComposer {
    /// Trailing slashes on `base` are dropped.
    pub fn new(base: impl AsRef<str>) -> Self {
        Self {
            base: base.as_ref().trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Home page URL (`{base}/`).
    pub fn home(&self) -> String {
        format!("{}/", self.base)
    }

    /// `{base}/{seg1}/.../{segN}`.
    pub fn compose<I, S>(&self, segments: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut url = self.base.clone();
        for segment in segments {
            url.push('/');
            url.push_str(segment.as_ref());
        }
        url
    }

    /// Resolve a breadcrumb-style URL.
    ///
    /// Anything starting with `http` is already absolute and returned as-is;
    /// paths are joined onto the base URL.
    pub fn resolve(&self, url: &str) -> String {
        if url.starts_with("http") {
            url.to_string()
        } else if url.starts_with('/') {
            format!("{}{}", self.base, url)
        } else {
            format!("{}/{}", self.base, url)
        }
    }

    pub fn city_url(&self, city: &City) -> Option<String> {
        city.slug().map(|slug| self.compose([slug]))
    }

    /// Needs both the venue slug and its city slug.
    pub fn venue_url(&self, venue: &Venue) -> Option<String> {
        let city = venue.city_slug()?;
        let slug = venue.slug()?;
        Some(self.compose([city, slug]))
    }

    pub fn review_url(&self, review: &Review, venue: &Venue) -> Option<String> {
        let city = venue.city_slug()?;
        let venue_slug = venue.slug()?;
        let slug = review.slug()?;
        Some(self.compose([city, venue_slug, REVIEW_SEGMENT, slug]))
    }

    pub fn post_url(&self, post: &Post) -> Option<String> {
        post.slug().map(|slug| self.compose([BLOG_SEGMENT, slug]))
    }

    /// `SearchAction` target template.
    pub fn search_template(&self) -> String {
        format!("{}/{}?q={{search_term_string}}", self.base, SEARCH_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasca_types::Slug;

    fn composer() -> UrlComposer {
        UrlComposer::new("https://tasca.es")
    }

    fn venue() -> Venue {
        let mut venue = Venue::new("venue-1", "Casa Pepe");
        venue.slug = Some(Slug::new("casa-pepe"));
        venue.city = Some(City::new("Madrid", "madrid"));
        venue
    }

    #[test]
    fn test_compose_segments() {
        assert_eq!(
            composer().compose(["madrid", "casa-pepe"]),
            "https://tasca.es/madrid/casa-pepe"
        );
        assert_eq!(composer().compose(Vec::<String>::new()), "https://tasca.es");
    }

    #[test]
    fn test_new_drops_trailing_slash() {
        assert_eq!(UrlComposer::new("https://tasca.es//").base(), "https://tasca.es");
        assert_eq!(composer().home(), "https://tasca.es/");
    }

    #[test]
    fn test_anchor() {
        assert_eq!(
            anchor("https://tasca.es/madrid/casa-pepe", Fragment::Business),
            "https://tasca.es/madrid/casa-pepe#business"
        );
        assert_eq!(
            anchor(&composer().home(), Fragment::Website),
            "https://tasca.es/#website"
        );
    }

    #[test]
    fn test_resolve_passes_absolute_urls_through() {
        let urls = composer();
        assert_eq!(
            urls.resolve("https://external.com/page"),
            "https://external.com/page"
        );
        assert_eq!(urls.resolve("http://old.tasca.es/x"), "http://old.tasca.es/x");
        assert_eq!(urls.resolve("/madrid"), "https://tasca.es/madrid");
        assert_eq!(urls.resolve("madrid"), "https://tasca.es/madrid");
        assert_eq!(urls.resolve("/"), "https://tasca.es/");
    }

    #[test]
    fn test_venue_url_requires_both_slugs() {
        let urls = composer();
        assert_eq!(
            urls.venue_url(&venue()).as_deref(),
            Some("https://tasca.es/madrid/casa-pepe")
        );

        let mut no_city = venue();
        no_city.city = None;
        assert_eq!(urls.venue_url(&no_city), None);

        let mut no_slug = venue();
        no_slug.slug = None;
        assert_eq!(urls.venue_url(&no_slug), None);
    }

    #[test]
    fn test_review_url() {
        let mut review = Review::new("review-1", "Cocido");
        review.slug = Some(Slug::new("cocido"));
        assert_eq!(
            composer().review_url(&review, &venue()).as_deref(),
            Some("https://tasca.es/madrid/casa-pepe/review/cocido")
        );
    }

    #[test]
    fn test_post_url_and_search_template() {
        let mut post = Post::new("post-1", "Callos");
        post.slug = Some(Slug::new("callos"));
        assert_eq!(
            composer().post_url(&post).as_deref(),
            Some("https://tasca.es/blog/callos")
        );
        assert_eq!(
            composer().search_template(),
            "https://tasca.es/buscar?q={search_term_string}"
        );
    }
}
