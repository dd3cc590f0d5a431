//! WebSite and Organization builders. Both depend only on site config.

use super::SchemaBuilder;
use crate::object::SchemaObject;
use crate::url::{anchor, Fragment};

/// Placeholder name schema.org expects in search templates.
const SEARCH_TERM: &str = "search_term_string";

impl SchemaBuilder {
    /// `WebSite` with a sitelinks `SearchAction` pointing at `/buscar`.
    pub fn website(&self) -> SchemaObject {
        let search = SchemaObject::new("SearchAction")
            .with(
                "target",
                SchemaObject::new("EntryPoint").with("urlTemplate", self.urls.search_template()),
            )
            .with("query-input", format!("required name={}", SEARCH_TERM));

        SchemaObject::document("WebSite")
            .with_id(anchor(&self.urls.home(), Fragment::Website))
            .with("name", self.site.name.as_str())
            .with("description", self.site.description.as_str())
            .with("url", self.site.url.as_str())
            .with("inLanguage", self.site.language.as_str())
            .with("potentialAction", search)
    }

    /// `Organization` for the publication. `sameAs` is always present, even
    /// when empty.
    pub fn organization(&self) -> SchemaObject {
        SchemaObject::document("Organization")
            .with_id(anchor(&self.urls.home(), Fragment::Organization))
            .with("name", self.site.name.as_str())
            .with("url", self.site.url.as_str())
            .with_opt("logo", self.logo())
            .with("sameAs", self.site.same_as.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_website_search_action() {
        let builder = SchemaBuilder::new(fixtures::site());
        let schema = builder.website();

        assert_eq!(schema.id(), Some("https://tasca.es/#website"));
        assert_eq!(
            schema.get("potentialAction"),
            Some(&json!({
                "@type": "SearchAction",
                "target": {
                    "@type": "EntryPoint",
                    "urlTemplate": "https://tasca.es/buscar?q={search_term_string}"
                },
                "query-input": "required name=search_term_string"
            }))
        );
    }

    #[test]
    fn test_organization_same_as_defaults_to_empty() {
        let builder = SchemaBuilder::new(fixtures::site());
        let schema = builder.organization();

        assert_eq!(
            schema.into_value(),
            json!({
                "@context": "https://schema.org",
                "@type": "Organization",
                "@id": "https://tasca.es/#organization",
                "name": "Tasca",
                "url": "https://tasca.es",
                "sameAs": []
            })
        );
    }

    #[test]
    fn test_organization_profiles_and_logo() {
        let site = fixtures::site()
            .with_logo("https://tasca.es/logo.png")
            .with_same_as(vec!["https://instagram.com/tasca".to_string()]);
        let schema = SchemaBuilder::new(site).organization();

        assert_eq!(schema.get("sameAs"), Some(&json!(["https://instagram.com/tasca"])));
        assert_eq!(
            schema.get_object("logo").and_then(|l| l.get_str("url").map(String::from)),
            Some("https://tasca.es/logo.png".to_string())
        );
    }
}
