//! Configuration loaded from the environment.
//!
//! | Variable                 | Default                                   |
//! |--------------------------|-------------------------------------------|
//! | `TASCA_SITE_NAME`        | `Tasca`                                   |
//! | `TASCA_SITE_DESCRIPTION` | `Reseñas de restaurantes en España`       |
//! | `TASCA_SITE_URL`         | `https://tasca.es`                        |
//! | `TASCA_SITE_LANGUAGE`    | `es-ES`                                   |
//! | `TASCA_SITE_LOGO`        | unset                                     |
//! | `TASCA_SITE_SAME_AS`     | unset (comma separated profile URLs)      |
//! | `SANITY_PROJECT_ID`      | unset (required only for fetching)        |
//! | `SANITY_DATASET`         | `production`                              |
//! | `SANITY_API_VERSION`     | `2024-01-01`                              |
//! | `SANITY_TOKEN`           | unset                                     |
//! | `SANITY_USE_CDN`         | `true`                                    |
//!
//! A `.env` file in the working directory is read first if present.

use crate::error::ConfigError;
use tasca_types::SiteConfig;
use tracing::{debug, info};
use url::Url;

pub const DEFAULT_SITE_NAME: &str = "Tasca";
pub const DEFAULT_SITE_DESCRIPTION: &str = "Reseñas de restaurantes en España";
pub const DEFAULT_SITE_URL: &str = "https://tasca.es";
pub const DEFAULT_SITE_LANGUAGE: &str = "es-ES";
pub const DEFAULT_DATASET: &str = "production";
pub const DEFAULT_API_VERSION: &str = "2024-01-01";

/// Sanity project settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanityConfig {
    pub project_id: Option<String>,
    pub dataset: String,
    /// Date-based API version without the leading `v`.
    pub api_version: String,
    pub token: Option<String>,
    pub use_cdn: bool,
}

impl Default for SanityConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            dataset: DEFAULT_DATASET.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            token: None,
            use_cdn: true,
        }
    }
}

/// Everything the process needs, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub site: SiteConfig,
    pub sanity: SanityConfig,
}

impl AppConfig {
    /// Load from the process environment (after `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let get_or = |key: &str, default: &str| {
            get(key).unwrap_or_else(|| {
                debug!("{key} not set, using default: {default}");
                default.to_string()
            })
        };

        let url = normalize_site_url(&get_or("TASCA_SITE_URL", DEFAULT_SITE_URL))?;

        let mut site = SiteConfig::new(
            get_or("TASCA_SITE_NAME", DEFAULT_SITE_NAME),
            get_or("TASCA_SITE_DESCRIPTION", DEFAULT_SITE_DESCRIPTION),
            url,
        )
        .with_language(get_or("TASCA_SITE_LANGUAGE", DEFAULT_SITE_LANGUAGE));

        if let Some(logo) = get("TASCA_SITE_LOGO") {
            site = site.with_logo(logo);
        }
        if let Some(profiles) = get("TASCA_SITE_SAME_AS") {
            site = site.with_same_as(split_list(&profiles));
        }

        let sanity = SanityConfig {
            project_id: get("SANITY_PROJECT_ID"),
            dataset: get_or("SANITY_DATASET", DEFAULT_DATASET),
            api_version: get_or("SANITY_API_VERSION", DEFAULT_API_VERSION)
                .trim_start_matches('v')
                .to_string(),
            token: get("SANITY_TOKEN"),
            use_cdn: match get("SANITY_USE_CDN") {
                Some(value) => parse_flag("SANITY_USE_CDN", &value)?,
                None => true,
            },
        };

        info!(
            site = %site.url,
            dataset = %sanity.dataset,
            sanity_configured = sanity.project_id.is_some(),
            "Configuration loaded"
        );

        Ok(Self { site, sanity })
    }
}

/// Parse and normalize the site URL: http(s) only, no trailing slash.
fn normalize_site_url(value: &str) -> Result<String, ConfigError> {
    let parsed = Url::parse(value).map_err(|source| ConfigError::InvalidSiteUrl {
        value: value.to_string(),
        source,
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            value: value.to_string(),
        });
    }

    Ok(value.trim_end_matches('/').to_string())
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.site.name, "Tasca");
        assert_eq!(config.site.url, "https://tasca.es");
        assert_eq!(config.site.language, "es-ES");
        assert!(config.site.same_as.is_empty());
        assert_eq!(config.sanity, SanityConfig::default());
    }

    #[test]
    fn test_site_overrides() {
        let config = load(&[
            ("TASCA_SITE_NAME", "Guía Tasca"),
            ("TASCA_SITE_URL", "https://guia.tasca.es/"),
            ("TASCA_SITE_SAME_AS", "https://instagram.com/tasca, ,https://x.com/tasca"),
            ("TASCA_SITE_LOGO", "https://guia.tasca.es/logo.png"),
        ])
        .unwrap();

        assert_eq!(config.site.name, "Guía Tasca");
        assert_eq!(config.site.url, "https://guia.tasca.es");
        assert_eq!(
            config.site.same_as,
            vec!["https://instagram.com/tasca", "https://x.com/tasca"]
        );
        assert_eq!(config.site.logo.as_deref(), Some("https://guia.tasca.es/logo.png"));
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = load(&[("TASCA_SITE_NAME", "  "), ("SANITY_DATASET", "")]).unwrap();
        assert_eq!(config.site.name, "Tasca");
        assert_eq!(config.sanity.dataset, "production");
    }

    #[test]
    fn test_invalid_site_url() {
        let err = load(&[("TASCA_SITE_URL", "tasca.es")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSiteUrl { .. }));

        let err = load(&[("TASCA_SITE_URL", "ftp://tasca.es")]).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme { .. }));
    }

    #[test]
    fn test_sanity_settings() {
        let config = load(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("SANITY_API_VERSION", "v2023-05-03"),
            ("SANITY_USE_CDN", "false"),
            ("SANITY_TOKEN", "sk-test"),
        ])
        .unwrap();

        assert_eq!(config.sanity.project_id.as_deref(), Some("abc123"));
        assert_eq!(config.sanity.api_version, "2023-05-03");
        assert!(!config.sanity.use_cdn);
        assert_eq!(config.sanity.token.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_invalid_flag() {
        let err = load(&[("SANITY_USE_CDN", "maybe")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for SANITY_USE_CDN: 'maybe' (expected true/false)"
        );
    }
}
