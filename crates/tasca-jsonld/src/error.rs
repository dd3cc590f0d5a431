//! Validation error types.

use thiserror::Error;

/// Problems found in a finished JSON-LD document.
///
/// `path` fields use a JSONPath-like notation rooted at `$`, e.g.
/// `$.@graph[1].reviewRating`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The top-level `@context` is missing or is not schema.org.
    #[error("Missing @context: expected \"https://schema.org\", found {}", .found.as_deref().unwrap_or("nothing"))]
    MissingContext {
        /// The `@context` that was present, if any.
        found: Option<String>,
    },

    /// A top-level node or `@graph` entry has no `@type`.
    #[error("Missing @type at {path}")]
    MissingType {
        /// Location of the untyped node.
        path: String,
    },

    /// A `@graph` entry is not a JSON object.
    #[error("Invalid @graph entry at {path}: expected an object")]
    NotAnObject {
        /// Location of the entry.
        path: String,
    },

    /// A `Rating`/`AggregateRating` value falls outside its declared bounds.
    #[error("Rating out of range at {path}: {value} (must be {worst}-{best})")]
    RatingOutOfRange {
        /// Location of the rating node.
        path: String,
        /// The offending `ratingValue`.
        value: f64,
        /// Declared `worstRating`.
        worst: f64,
        /// Declared `bestRating`.
        best: f64,
    },

    /// A rating node has a non-numeric `ratingValue`.
    #[error("Invalid ratingValue at {path}: expected a number")]
    InvalidRatingValue {
        /// Location of the rating node.
        path: String,
    },

    /// A `ListItem` position does not match its 1-based index.
    #[error("Breadcrumb position mismatch at {path}: expected {expected}, found {}", .found.map(|p| p.to_string()).unwrap_or_else(|| "nothing".to_string()))]
    BreadcrumbPosition {
        /// Location of the list item.
        path: String,
        /// Index + 1.
        expected: u64,
        /// The position actually present.
        found: Option<u64>,
    },

    /// Two `@graph` entries share an `@id`.
    #[error("Duplicate @id in @graph: {id}")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
}

impl ValidationError {
    /// Get an error code for this error type.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingContext { .. } => "MISSING_CONTEXT",
            Self::MissingType { .. } => "MISSING_TYPE",
            Self::NotAnObject { .. } => "NOT_AN_OBJECT",
            Self::RatingOutOfRange { .. } => "RATING_OUT_OF_RANGE",
            Self::InvalidRatingValue { .. } => "INVALID_RATING_VALUE",
            Self::BreadcrumbPosition { .. } => "BREADCRUMB_POSITION",
            Self::DuplicateId { .. } => "DUPLICATE_ID",
        }
    }

    /// Check if this is a blocking error (vs warning).
    ///
    /// Rating problems come straight from editor input and duplicate nodes
    /// are legal JSON-LD, so those only warn.
    pub fn is_blocking(&self) -> bool {
        !matches!(
            self,
            Self::RatingOutOfRange { .. } | Self::InvalidRatingValue { .. } | Self::DuplicateId { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::MissingContext { found: None };
        assert_eq!(
            err.to_string(),
            "Missing @context: expected \"https://schema.org\", found nothing"
        );

        let err = ValidationError::BreadcrumbPosition {
            path: "$.itemListElement[0]".to_string(),
            expected: 1,
            found: Some(2),
        };
        assert_eq!(
            err.to_string(),
            "Breadcrumb position mismatch at $.itemListElement[0]: expected 1, found 2"
        );
    }

    #[test]
    fn test_blocking_classification() {
        assert!(ValidationError::MissingType { path: "$".into() }.is_blocking());
        assert!(!ValidationError::DuplicateId { id: "x".into() }.is_blocking());
        assert!(!ValidationError::RatingOutOfRange {
            path: "$".into(),
            value: 0.0,
            worst: 1.0,
            best: 5.0,
        }
        .is_blocking());
        assert_eq!(
            ValidationError::NotAnObject { path: "$".into() }.code(),
            "NOT_AN_OBJECT"
        );
    }
}
