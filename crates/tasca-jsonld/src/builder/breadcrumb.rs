//! BreadcrumbList builder.

use super::SchemaBuilder;
use crate::object::SchemaObject;
use tasca_types::BreadcrumbItem;

impl SchemaBuilder {
    /// Build a `BreadcrumbList` in the order given.
    ///
    /// Positions are 1-based list indices. Relative URLs are resolved against
    /// the site; absolute ones are kept verbatim.
    pub fn breadcrumbs(&self, items: &[BreadcrumbItem]) -> SchemaObject {
        let elements: Vec<SchemaObject> = items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                SchemaObject::new("ListItem")
                    .with("position", idx + 1)
                    .with("name", item.name.as_str())
                    .with("item", self.urls.resolve(&item.url))
            })
            .collect();

        SchemaObject::document("BreadcrumbList").with("itemListElement", elements)
    }
}
