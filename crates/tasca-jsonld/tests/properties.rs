//! Behavioural contracts of the JSON-LD builders, exercised through the
//! public API only.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;
use tasca_jsonld::{combine, faq_page, rating, validate, SchemaBuilder, SchemaObject};
use tasca_types::{
    BreadcrumbItem, City, FaqItem, GeoPoint, Ratings, Review, SiteConfig, Slug, Social, Venue,
};

fn builder() -> SchemaBuilder {
    SchemaBuilder::new(SiteConfig::new(
        "Tasca",
        "Reseñas de restaurantes",
        "https://tasca.es",
    ))
}

fn venue() -> Venue {
    let mut venue = Venue::new("venue-1", "Bodega Ardosa");
    venue.slug = Some(Slug::new("bodega-ardosa"));
    venue.city = Some(City::new("Madrid", "madrid").with_region("Comunidad de Madrid"));
    venue.address = Some("Calle de Colón 13".to_string());
    venue.geo = Some(GeoPoint {
        lat: 40.4253,
        lng: -3.7017,
    });
    venue.schema_type = Some("BarOrPub".to_string());
    venue
}

fn review() -> Review {
    let mut review = Review::new("review-1", "Tortilla y vermú");
    review.slug = Some(Slug::new("tortilla-y-vermu"));
    review.author = Some("Lucía Pérez".to_string());
    review.published_at = Some("2024-03-01T10:00:00Z".to_string());
    review.tldr = Some("Tortilla jugosa, vermú de grifo.".to_string());
    review.ratings = Ratings::new(9.0, 8.0, 9.0, 7.0);
    review
}

// ============================================================================
// RATINGS
// ============================================================================

#[test]
fn test_rating_scale_conversion() {
    let ratings = Ratings::new(9.0, 8.0, 9.0, 7.0);
    assert_eq!(rating::overall(&ratings), 8.25);
    assert_eq!(rating::schema_rating(&ratings), 4.1);
}

#[test]
fn test_review_rating_uses_five_point_scale() {
    let schema = builder().review(&review(), &venue());
    assert_eq!(
        schema.get("reviewRating"),
        Some(&json!({"@type": "Rating", "ratingValue": 4.1, "bestRating": 5, "worstRating": 1}))
    );
}

// ============================================================================
// FAQ / BREADCRUMBS
// ============================================================================

#[test]
fn test_faq_builder_null_safety() {
    assert!(faq_page(None).is_none());
    assert!(faq_page(Some(Vec::<FaqItem>::new().as_slice())).is_none());
}

#[test]
fn test_breadcrumb_absolute_url_pass_through() {
    let schema = builder().breadcrumbs(&[BreadcrumbItem::new(
        "Externo",
        "https://external.com/page",
    )]);
    let items = schema.get("itemListElement").unwrap();
    assert_eq!(items[0]["item"], json!("https://external.com/page"));
}

fn arb_breadcrumbs() -> impl Strategy<Value = Vec<BreadcrumbItem>> {
    prop::collection::vec(
        ("[A-Za-zñ ]{1,12}", prop_oneof!["/[a-z-]{0,10}", "https://[a-z]{3,8}\\.com/[a-z]{0,6}"]),
        0..12,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .map(|(name, url)| BreadcrumbItem::new(name, url))
            .collect()
    })
}

proptest! {
    #[test]
    fn breadcrumb_positions_follow_input_order(items in arb_breadcrumbs()) {
        let schema = builder().breadcrumbs(&items);
        let elements = schema.get("itemListElement").and_then(|v| v.as_array()).unwrap();

        prop_assert_eq!(elements.len(), items.len());
        for (idx, (element, item)) in elements.iter().zip(&items).enumerate() {
            prop_assert_eq!(element["position"].as_u64(), Some(idx as u64 + 1));
            prop_assert_eq!(element["name"].as_str(), Some(item.name.as_str()));
            if item.url.starts_with("http") {
                prop_assert_eq!(element["item"].as_str(), Some(item.url.as_str()));
            }
        }
        prop_assert!(validate(&schema).is_valid());
    }

    #[test]
    fn builders_are_idempotent(
        food in 0.0f64..=10.0,
        service in 0.0f64..=10.0,
        ambience in 0.0f64..=10.0,
        value in 0.0f64..=10.0,
        tags in prop::option::of(prop::collection::vec("[a-z]{1,8}", 0..4)),
    ) {
        let builder = builder();
        let mut review = review();
        review.ratings = Ratings::new(food, service, ambience, value);

        prop_assert_eq!(
            builder.review(&review, &venue()),
            builder.review(&review, &venue())
        );

        let mut post = tasca_types::Post::new("post-1", "Guía");
        post.slug = Some(Slug::new("guia"));
        post.tags = tags;
        prop_assert_eq!(builder.article(&post), builder.article(&post));
        prop_assert_eq!(builder.website(), builder.website());
    }

    #[test]
    fn schema_rating_stays_on_five_point_scale(
        food in 0.0f64..=10.0,
        service in 0.0f64..=10.0,
        ambience in 0.0f64..=10.0,
        value in 0.0f64..=10.0,
    ) {
        let rating = rating::schema_rating(&Ratings::new(food, service, ambience, value));
        prop_assert!((0.0..=5.0).contains(&rating));
        // one decimal place
        prop_assert!(((rating * 10.0).round() - rating * 10.0).abs() < 1e-9);
    }
}

// ============================================================================
// LOCAL BUSINESS
// ============================================================================

#[test]
fn test_same_as_filtering() {
    let mut venue = venue();
    venue.social = Some(Social {
        instagram: Some("https://a".to_string()),
        facebook: None,
        tiktok: None,
        maps: Some(String::new()),
    });
    venue.website = None;

    let schema = builder().local_business(&venue);
    assert_eq!(schema.get("sameAs"), Some(&json!(["https://a"])));
}

#[test]
fn test_same_as_filtering_from_cms_json() {
    let venue: Venue = serde_json::from_value(json!({
        "_id": "venue-2",
        "title": "La Venencia",
        "social": {"instagram": "https://a", "facebook": null, "maps": ""},
        "website": null
    }))
    .unwrap();

    let schema = builder().local_business(&venue);
    assert_eq!(schema.get("sameAs"), Some(&json!(["https://a"])));
}

#[test]
fn test_local_business_default_type() {
    let mut venue = venue();
    venue.schema_type = None;
    assert_eq!(
        builder().local_business(&venue).schema_type(),
        Some("LocalBusiness")
    );
}

#[test]
fn test_review_embeds_local_business() {
    let venue = venue();
    let schema = builder().review(&review(), &venue);
    let item = schema.get_object("itemReviewed").unwrap();

    assert_eq!(item.schema_type(), Some("BarOrPub"));
    assert_eq!(item.get_str("name"), Some(venue.title.as_str()));
}

// ============================================================================
// GRAPH COMBINER
// ============================================================================

#[test]
fn test_graph_combiner_cardinality() {
    let a = builder().website();
    let b = builder().organization();

    assert_eq!(combine(Vec::<Option<SchemaObject>>::new()), None);
    assert_eq!(combine([Some(a.clone())]), Some(a.clone()));
    assert_eq!(
        combine([Some(a.clone()), Some(b.clone())]).map(SchemaObject::into_value),
        Some(json!({
            "@context": "https://schema.org",
            "@graph": [a.clone().into_value(), b.into_value()]
        }))
    );
    assert_eq!(
        combine([Some(a.clone()), None, None, Some(a.clone())]).map(SchemaObject::into_value),
        Some(json!({
            "@context": "https://schema.org",
            "@graph": [a.clone().into_value(), a.into_value()]
        }))
    );
}

#[test]
fn test_single_schema_without_context_is_not_wrapped() {
    let bare = SchemaObject::new("Thing");
    let combined = combine([None, Some(bare.clone())]).unwrap();
    assert_eq!(combined, bare);
    assert!(!combined.contains_key("@context"));
}
