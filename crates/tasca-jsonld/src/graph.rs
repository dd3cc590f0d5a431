//! Graph combiner - merge several schema nodes into one JSON-LD document.

use crate::object::{SchemaObject, SCHEMA_CONTEXT};

/// Merge schemas into a single document for one `<script>` tag.
///
/// `None` entries are dropped first. Then:
/// - nothing left: `None`
/// - one left: that schema, returned as-is (no `@context` is added)
/// - two or more: `{ "@context", "@graph": [...] }` in input order, with
///   duplicates kept
///
/// # Example
///
/// ```
/// use tasca_jsonld::{combine, SchemaObject};
///
/// let a = SchemaObject::document("WebSite");
/// let b = SchemaObject::document("Organization");
///
/// assert!(combine(Vec::<Option<SchemaObject>>::new()).is_none());
/// assert_eq!(combine([Some(a.clone()), None]), Some(a.clone()));
///
/// let graph = combine([Some(a), None, Some(b)]).unwrap();
/// assert_eq!(graph.get("@graph").and_then(|g| g.as_array()).map(Vec::len), Some(2));
/// ```
pub fn combine<I>(schemas: I) -> Option<SchemaObject>
where
    I: IntoIterator<Item = Option<SchemaObject>>,
{
    let mut valid: Vec<SchemaObject> = schemas.into_iter().flatten().collect();

    match valid.len() {
        0 => None,
        1 => valid.pop(),
        _ => Some(
            SchemaObject::default()
                .with("@context", SCHEMA_CONTEXT)
                .with("@graph", valid),
        ),
    }
}
