//! BlogPosting builder - blog posts and guides.

use super::SchemaBuilder;
use crate::object::{present, SchemaObject};
use crate::url::{anchor, Fragment};
use tasca_types::{ImageRef, Post};
use tracing::debug;

impl SchemaBuilder {
    /// Build the `BlogPosting` node for a post.
    ///
    /// `keywords` is the tags joined with `", "` and is left out when the
    /// post has no tags.
    pub fn article(&self, post: &Post) -> SchemaObject {
        let url = self.urls.post_url(post);
        let mut schema = SchemaObject::document("BlogPosting");

        if let Some(url) = &url {
            schema = schema.with_id(anchor(url, Fragment::Article));
        } else {
            debug!(post_id = %post.id, "post has no slug, omitting @id and mainEntityOfPage");
        }

        schema = schema
            .with("headline", post.title.as_str())
            .with_opt("description", present(&post.excerpt))
            .with_opt("image", post.cover.as_ref().and_then(ImageRef::url))
            .with_opt("datePublished", post.published_at.as_deref())
            .with_opt("dateModified", post.updated_at.as_deref())
            .with("author", self.person(present(&post.author), None))
            .with("publisher", self.publisher())
            .with("inLanguage", self.site.language.as_str());

        if let Some(url) = url {
            schema = schema.with(
                "mainEntityOfPage",
                SchemaObject::new("WebPage").with_id(url),
            );
        }

        match post.tags.as_deref() {
            Some(tags) if !tags.is_empty() => schema.with("keywords", tags.join(", ")),
            _ => schema,
        }
    }

    fn publisher(&self) -> SchemaObject {
        SchemaObject::new("Organization")
            .with("name", self.site.name.as_str())
            .with_opt("logo", self.logo())
    }
}
