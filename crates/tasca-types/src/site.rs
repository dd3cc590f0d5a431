//! Site-wide configuration shared by every structured-data builder.

use serde::{Deserialize, Serialize};

/// Immutable description of the site itself.
///
/// Built once at startup (see `tasca::config`) and handed to the schema
/// builders. `url` never carries a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    pub url: String,
    /// BCP 47 tag used for `inLanguage`.
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub logo: Option<String>,
    /// Social profiles of the publication itself.
    #[serde(default)]
    pub same_as: Vec<String>,
}

fn default_language() -> String {
    "es-ES".to_string()
}

impl SiteConfig {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        let url: String = url.into();
        Self {
            name: name.into(),
            description: description.into(),
            url: url.trim_end_matches('/').to_string(),
            language: default_language(),
            logo: None,
            same_as: Vec::new(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    pub fn with_same_as(mut self, profiles: Vec<String>) -> Self {
        self.same_as = profiles;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let site = SiteConfig::new("Tasca", "Reseñas", "https://tasca.es/");
        assert_eq!(site.url, "https://tasca.es");
        assert_eq!(site.language, "es-ES");
        assert!(site.same_as.is_empty());
    }
}
