//! Blog posts and guides.

use crate::{slug_str, ImageRef, Slug};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(rename = "_updatedAt", default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub cover: Option<ImageRef>,
}

impl Post {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn slug(&self) -> Option<&str> {
        slug_str(&self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_deserialization() {
        let json = r#"{
            "_id": "post-1",
            "_updatedAt": "2024-05-02T08:00:00Z",
            "title": "Dónde comer callos",
            "slug": {"current": "donde-comer-callos"},
            "tags": ["madrid", "casquería"],
            "cover": {"url": "https://cdn.sanity.io/cover.jpg"}
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.slug(), Some("donde-comer-callos"));
        assert_eq!(post.updated_at.as_deref(), Some("2024-05-02T08:00:00Z"));
        assert_eq!(post.tags.as_ref().map(Vec::len), Some(2));
        assert_eq!(
            post.cover.as_ref().and_then(ImageRef::url),
            Some("https://cdn.sanity.io/cover.jpg")
        );
    }

    #[test]
    fn test_post_without_tags() {
        let post: Post = serde_json::from_str(r#"{"_id":"p","title":"Sin etiquetas"}"#).unwrap();
        assert!(post.tags.is_none());
    }
}
