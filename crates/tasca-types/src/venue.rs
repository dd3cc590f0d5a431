//! Venue documents and their embedded city/location shapes.

use crate::{slug_str, FaqItem, ImageRef, Slug};
use serde::{Deserialize, Serialize};

/// A restaurant, bar or café as projected by the venue queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default)]
    pub description: Option<String>,

    // Location
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub geo: Option<GeoPoint>,
    #[serde(default)]
    pub city: Option<City>,

    // Contact
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub social: Option<Social>,

    // Classification
    /// schema.org business subtype, e.g. `Restaurant`, `BarOrPub`, `CafeOrCoffeeShop`.
    #[serde(default)]
    pub schema_type: Option<String>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub opening_hours: Vec<String>,

    #[serde(default)]
    pub images: Vec<ImageRef>,

    /// Questions shown on the venue page, in editor order.
    #[serde(default)]
    pub faqs: Vec<FaqItem>,
}

impl Venue {
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

    /// Slug of the owning city, if the city was dereferenced and has one.
    pub fn city_slug(&self) -> Option<&str> {
        self.city.as_ref().and_then(City::slug)
    }
}

/// City a venue belongs to (`city->{ title, slug, region }`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default)]
    pub region: Option<String>,
}

impl City {
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: Some(Slug::new(slug)),
            region: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn slug(&self) -> Option<&str> {
        slug_str(&self.slug)
    }
}

/// Sanity geopoint. `alt` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Social profile links. Any of them may be missing, null or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
    /// Google Maps listing.
    #[serde(default)]
    pub maps: Option<String>,
}
