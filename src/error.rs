//! Error types for the tasca crate.
//!
//! The schema builders themselves never fail; errors come from the layers
//! around them: configuration, CMS access and page bundles.

use thiserror::Error;

/// Main error type.
#[derive(Error, Debug)]
pub enum TascaError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Sanity error: {0}")]
    Sanity(#[from] SanityError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{kind} not found: {slug}")]
    NotFound { kind: &'static str, slug: String },

    #[error("Review '{review_id}' has no venue; pass one explicitly or dereference venue->")]
    MissingVenue { review_id: String },
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid site URL '{value}': {source}")]
    InvalidSiteUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Site URL '{value}' must use http or https")]
    UnsupportedScheme { value: String },

    #[error("Invalid value for {key}: '{value}' (expected true/false)")]
    InvalidFlag { key: &'static str, value: String },
}

/// Sanity client errors.
#[derive(Error, Debug)]
pub enum SanityError {
    #[error("Sanity is not configured: set SANITY_PROJECT_ID")]
    NotConfigured,

    #[error("Invalid Sanity endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sanity returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to encode query parameter ${name}: {source}")]
    EncodeParam {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to decode query result: {0}")]
    Decode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TascaError>;
