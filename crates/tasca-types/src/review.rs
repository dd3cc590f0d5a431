//! Review documents and their per-category ratings.

use crate::{slug_str, Slug, Venue};
use serde::{Deserialize, Serialize};

/// A published review of a venue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<Slug>,

    #[serde(default)]
    pub author: Option<String>,
    /// Avatar image URL (`authorAvatar.asset->url`).
    #[serde(default)]
    pub author_avatar: Option<String>,

    /// ISO-8601 string, passed through untouched.
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub visit_date: Option<String>,

    #[serde(default)]
    pub ratings: Ratings,
    /// One-paragraph summary used as the review body.
    #[serde(default)]
    pub tldr: Option<String>,

    /// Owning venue, present when the query dereferenced `venue->`.
    #[serde(default)]
    pub venue: Option<Box<Venue>>,
}

impl Review {
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

/// Sub-ratings on the internal 0-10 scale.
///
/// Values are not range-checked. `overall`, when the editor set one, wins
/// over the derived average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratings {
    #[serde(default)]
    pub food: Option<f64>,
    #[serde(default)]
    pub service: Option<f64>,
    #[serde(default)]
    pub ambience: Option<f64>,
    #[serde(default)]
    pub value: Option<f64>,
    /// Older documents call `value` this. Migrated records can carry both
    /// keys; `value` wins.
    #[serde(default, rename = "valueForMoney", skip_serializing_if = "Option::is_none")]
    pub value_for_money: Option<f64>,
    #[serde(default)]
    pub overall: Option<f64>,
}

/// The four rated categories, in averaging order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingCategory {
    Food,
    Service,
    Ambience,
    Value,
}

impl RatingCategory {
    pub const ALL: [Self; 4] = [Self::Food, Self::Service, Self::Ambience, Self::Value];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Service => "service",
            Self::Ambience => "ambience",
            Self::Value => "value",
        }
    }
}

impl Ratings {
    pub fn new(food: f64, service: f64, ambience: f64, value: f64) -> Self {
        Self {
            food: Some(food),
            service: Some(service),
            ambience: Some(ambience),
            value: Some(value),
            value_for_money: None,
            overall: None,
        }
    }

    pub fn with_overall(mut self, overall: f64) -> Self {
        self.overall = Some(overall);
        self
    }

    pub fn get(&self, category: RatingCategory) -> Option<f64> {
        match category {
            RatingCategory::Food => self.food,
            RatingCategory::Service => self.service,
            RatingCategory::Ambience => self.ambience,
            RatingCategory::Value => self.value.or(self.value_for_money),
        }
    }

    /// Categories with no score. These count as zero when averaging.
    pub fn missing_categories(&self) -> Vec<RatingCategory> {
        RatingCategory::ALL
            .into_iter()
            .filter(|c| self.get(*c).is_none())
            .collect()
    }
}
