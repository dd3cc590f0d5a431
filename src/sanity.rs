//! Sanity query API client
//!
//! Read-only HTTP client for the `data/query` endpoint. Queries come from
//! [`crate::groq`]; parameters are JSON-encoded into `$name` query pairs.

use crate::config::SanityConfig;
use crate::error::SanityError;
use crate::groq::{self, GroqQuery};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tasca_types::{Post, Review, Venue};
use tracing::{debug, warn};
use url::Url;

const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Where page content comes from.
///
/// Implemented by [`SanityClient`]; tests supply in-memory sources.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn venue(&self, city: &str, slug: &str) -> Result<Option<Venue>, SanityError>;

    async fn reviews_for_venue(&self, venue_id: &str) -> Result<Vec<Review>, SanityError>;

    async fn review(&self, slug: &str) -> Result<Option<Review>, SanityError>;

    async fn post(&self, slug: &str) -> Result<Option<Post>, SanityError>;
}

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: T,
}

pub struct SanityClient {
    http: Client,
    endpoint: Url,
    token: Option<String>,
}

impl SanityClient {
    pub fn new(config: &SanityConfig) -> Result<Self, SanityError> {
        let project_id = config
            .project_id
            .as_deref()
            .ok_or(SanityError::NotConfigured)?;

        let host = if config.use_cdn && config.token.is_none() {
            "apicdn"
        } else {
            "api"
        };
        let endpoint = Url::parse(&format!(
            "https://{}.{}.sanity.io/v{}/data/query/{}",
            project_id, host, config.api_version, config.dataset
        ))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        debug!(endpoint = %endpoint, "Sanity client ready");

        Ok(Self {
            http,
            endpoint,
            token: config.token.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Full request URL for a query, parameters included.
    pub fn query_url(&self, query: &GroqQuery) -> Result<Url, SanityError> {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", &query.query);
            for (name, value) in &query.params {
                let encoded =
                    serde_json::to_string(value).map_err(|source| SanityError::EncodeParam {
                        name: name.clone(),
                        source,
                    })?;
                pairs.append_pair(&format!("${}", name), &encoded);
            }
        }
        Ok(url)
    }

    /// Run a query and deserialize its `result`.
    pub async fn fetch<T: DeserializeOwned>(&self, query: &GroqQuery) -> Result<T, SanityError> {
        let url = self.query_url(query)?;
        debug!(params = query.params.len(), "Sanity query");

        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Sanity query failed");
            return Err(SanityError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: QueryResponse<T> = serde_json::from_str(&body).map_err(SanityError::Decode)?;
        Ok(parsed.result)
    }
}

#[async_trait]
impl ContentSource for SanityClient {
    async fn venue(&self, city: &str, slug: &str) -> Result<Option<Venue>, SanityError> {
        self.fetch(&groq::venue_by_slug(city, slug)).await
    }

    async fn reviews_for_venue(&self, venue_id: &str) -> Result<Vec<Review>, SanityError> {
        let reviews: Option<Vec<Review>> = self.fetch(&groq::reviews_for_venue(venue_id)).await?;
        Ok(reviews.unwrap_or_default())
    }

    async fn review(&self, slug: &str) -> Result<Option<Review>, SanityError> {
        self.fetch(&groq::review_by_slug(slug)).await
    }

    async fn post(&self, slug: &str) -> Result<Option<Post>, SanityError> {
        self.fetch(&groq::post_by_slug(slug)).await
    }
}
