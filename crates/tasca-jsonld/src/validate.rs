//! Validation for finished JSON-LD documents.
//!
//! Implements pre-render checks:
//! 1. Context (top-level `@context` is schema.org)
//! 2. Typing (every top-level node / `@graph` entry has `@type`)
//! 3. Rating bounds (`ratingValue` within `worstRating..=bestRating`)
//! 4. Breadcrumb positions (1-based, consecutive)
//! 5. Duplicate `@id`s across `@graph` entries

use crate::error::ValidationError;
use crate::object::{SchemaObject, SCHEMA_CONTEXT};
use crate::rating::{BEST_RATING, WORST_RATING};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Result of validating a document.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Blocking errors (the document should not be emitted).
    pub errors: Vec<ValidationError>,
    /// Non-blocking warnings (the document can be emitted).
    pub warnings: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed (no blocking errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error or warning based on severity.
    pub fn add(&mut self, error: ValidationError) {
        if error.is_blocking() {
            self.errors.push(error);
        } else {
            self.warnings.push(error);
        }
    }

    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }
}

/// Validate a JSON-LD document.
///
/// # Example
///
/// ```
/// use tasca_jsonld::{validate, SchemaObject};
///
/// let result = validate(&SchemaObject::document("WebSite"));
/// assert!(result.is_valid());
///
/// let result = validate(&SchemaObject::new("WebSite"));
/// assert_eq!(result.errors[0].code(), "MISSING_CONTEXT");
/// ```
pub fn validate(document: &SchemaObject) -> ValidationResult {
    let mut result = ValidationResult::new();

    // 1. Context
    validate_context(document, &mut result);

    // 2-4. Nodes
    match document.get("@graph") {
        Some(Value::Array(entries)) => {
            let mut seen_ids: HashSet<&str> = HashSet::new();
            for (idx, entry) in entries.iter().enumerate() {
                let path = format!("$.@graph[{}]", idx);
                let Value::Object(node) = entry else {
                    result.add(ValidationError::NotAnObject { path });
                    continue;
                };

                validate_typed(node, &path, &mut result);
                walk(node, &path, &mut result);

                // 5. Duplicate ids
                if let Some(id) = node.get("@id").and_then(Value::as_str) {
                    if !seen_ids.insert(id) {
                        result.add(ValidationError::DuplicateId { id: id.to_string() });
                    }
                }
            }
        }
        _ => {
            validate_typed(document.as_map(), "$", &mut result);
            walk(document.as_map(), "$", &mut result);
        }
    }

    result
}

fn validate_context(document: &SchemaObject, result: &mut ValidationResult) {
    match document.get("@context") {
        Some(Value::String(context)) if context == SCHEMA_CONTEXT => {}
        Some(other) => result.add(ValidationError::MissingContext {
            found: Some(match other {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
        }),
        None => result.add(ValidationError::MissingContext { found: None }),
    }
}

fn validate_typed(node: &Map<String, Value>, path: &str, result: &mut ValidationResult) {
    let typed = node
        .get("@type")
        .and_then(Value::as_str)
        .is_some_and(|t| !t.is_empty());
    if !typed {
        result.add(ValidationError::MissingType {
            path: path.to_string(),
        });
    }
}

/// Depth-first walk over every nested object, checking typed nodes.
fn walk(node: &Map<String, Value>, path: &str, result: &mut ValidationResult) {
    match node.get("@type").and_then(Value::as_str) {
        Some("Rating") | Some("AggregateRating") => validate_rating(node, path, result),
        Some("BreadcrumbList") => validate_breadcrumbs(node, path, result),
        _ => {}
    }

    for (key, value) in node {
        match value {
            Value::Object(child) => walk(child, &format!("{}.{}", path, key), result),
            Value::Array(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if let Value::Object(child) = item {
                        walk(child, &format!("{}.{}[{}]", path, key, idx), result);
                    }
                }
            }
            _ => {}
        }
    }
}

fn validate_rating(node: &Map<String, Value>, path: &str, result: &mut ValidationResult) {
    let bound = |key: &str, default: u8| {
        node.get(key)
            .and_then(Value::as_f64)
            .unwrap_or(f64::from(default))
    };
    let worst = bound("worstRating", WORST_RATING);
    let best = bound("bestRating", BEST_RATING);

    match node.get("ratingValue").and_then(Value::as_f64) {
        Some(value) if value < worst || value > best => {
            result.add(ValidationError::RatingOutOfRange {
                path: path.to_string(),
                value,
                worst,
                best,
            });
        }
        Some(_) => {}
        None => result.add(ValidationError::InvalidRatingValue {
            path: path.to_string(),
        }),
    }
}

fn validate_breadcrumbs(node: &Map<String, Value>, path: &str, result: &mut ValidationResult) {
    let Some(Value::Array(items)) = node.get("itemListElement") else {
        return;
    };

    for (idx, item) in items.iter().enumerate() {
        let expected = idx as u64 + 1;
        let found = item.get("position").and_then(Value::as_u64);
        if found != Some(expected) {
            result.add(ValidationError::BreadcrumbPosition {
                path: format!("{}.itemListElement[{}]", path, idx),
                expected,
                found,
            });
        }
    }
}
