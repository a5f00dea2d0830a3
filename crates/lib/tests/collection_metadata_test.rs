//! # Collection Metadata Tests
//!
//! Covers the listing-page resolver: titles, lead-item descriptions, fixed
//! `summary` types and lookup failures.

use seometa::resolvers::CollectionMetadataResolver;
use seometa::{
    CollectionDescriptor, MemoryStore, MetadataClientBuilder, MetadataError, MetadataHooks,
    MetadataTarget, SiteIdentity,
};
use seometa_test_utils::{content_item, sample_store};
use std::sync::Arc;

#[tokio::test]
async fn test_blog_collection_uses_latest_post_and_summary_types() {
    // --- 1. Arrange ---
    let client = MetadataClientBuilder::new()
        .store(sample_store())
        .build()
        .unwrap();

    // --- 2. Act ---
    let result = client
        .resolve(&MetadataTarget::Collection("post".to_string()))
        .await
        .unwrap();

    // --- 3. Assert ---
    assert_eq!(result.title, "Blog - Site");
    assert_eq!(
        result.keys(),
        vec![
            "description",
            "og:locale",
            "og:type",
            "og:title",
            "og:description",
            "og:url",
            "og:site_name",
            "twitter:card",
            "twitter:title",
            "twitter:description",
            "google-site-verification",
        ]
    );
    assert_eq!(result.content("og:type").unwrap(), "summary");
    assert_eq!(result.content("twitter:card").unwrap(), "summary");
    assert_eq!(result.content("og:title").unwrap(), "Blog - Site");
    assert_eq!(result.content("twitter:title").unwrap(), "Blog - Site");
    // The lead item's overrides are not consulted, only its body.
    assert_eq!(
        result.content("description").unwrap(),
        "Body that nobody reads."
    );
    assert_eq!(
        result.content("og:description").unwrap(),
        "Body that nobody reads."
    );
    assert_eq!(
        result.content("og:url").unwrap(),
        "https://example.com/edited/"
    );
    assert!(result.tag("og:updated_time").is_none());
    assert!(result.tag("og:image").is_none());
}

#[test]
fn test_collection_title_hook_is_keyed_by_type() {
    let hooks = MetadataHooks::new()
        .with_collection_title("event", |_, descriptor| {
            format!("Upcoming {}", descriptor.plural_label)
        });
    let client = MetadataClientBuilder::new()
        .store(sample_store())
        .hooks(hooks)
        .build()
        .unwrap();

    let events = client.resolve_collection("event").unwrap();
    let pages = client.resolve_collection("page").unwrap();

    assert_eq!(events.title, "Upcoming Events");
    assert_eq!(events.content("og:title").unwrap(), "Upcoming Events");
    assert_eq!(events.content("og:url").unwrap(), "https://example.com/?p=4");
    assert_eq!(pages.title, "Pages - Site");
    assert_eq!(pages.content("og:url").unwrap(), "https://example.com/");
}

#[test]
fn test_resolver_accepts_explicit_inputs() {
    let store = sample_store();
    let hooks = MetadataHooks::new();
    let resolver = CollectionMetadataResolver::new(&*store, &*store, &hooks);
    let descriptor = CollectionDescriptor {
        type_id: "post".to_string(),
        plural_label: "Articles".to_string(),
    };
    let lead = content_item(2, "post", "Hello", "<p>Lead body</p>");
    let site = SiteIdentity {
        name: "Other".to_string(),
        locale: "fr_FR".to_string(),
        ..Default::default()
    };

    let result = resolver.resolve(&descriptor, &lead, &site).unwrap();

    assert_eq!(result.title, "Articles - Other");
    assert_eq!(result.content("description").unwrap(), "Lead body");
    assert_eq!(result.content("og:locale").unwrap(), "fr_FR");
    assert_eq!(result.content("og:type").unwrap(), "summary");
}

#[test]
fn test_unknown_type_and_empty_type_fail_lookup() {
    let yaml = r#"
base_url: "https://example.com/"
site:
  name: "Site"
types:
  - type_id: "recipe"
    plural_label: "Recipes"
"#;
    let client = MetadataClientBuilder::new()
        .store(Arc::new(MemoryStore::from_yaml_str(yaml).unwrap()))
        .build()
        .unwrap();

    let unknown = client.resolve_collection("nope").unwrap_err();
    let empty = client.resolve_collection("recipe").unwrap_err();

    assert!(matches!(unknown, MetadataError::TypeNotFound(t) if t == "nope"));
    assert!(matches!(empty, MetadataError::NoLeadItem(t) if t == "recipe"));
}
