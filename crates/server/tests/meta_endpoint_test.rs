//! # Metadata Endpoint Tests
//!
//! End-to-end tests for `/items/{id}`, `/items/{id}/meta` and
//! `/collections/{type_id}/meta`, covering the `meta` REST field, configured
//! collection titles and image-dimension probing.

mod common;

use anyhow::Result;
use common::{tag_content, TestApp};
use httpmock::{Method::GET, Mock, MockServer};
use reqwest::StatusCode;
use seometa_test_utils::{png_bytes, site_yaml_with_logo, SITE_YAML};
use serde_json::{json, Value};

#[tokio::test]
async fn test_item_meta_uses_derived_defaults() -> Result<()> {
    // Arrange
    let app = TestApp::spawn(SITE_YAML).await?;

    // Act
    let response = app.get("/items/2/meta").await?;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let meta: Value = response.json().await?;
    assert_eq!(meta["title"], "Hello - Site");
    assert_eq!(tag_content(&meta, "description"), Some(&json!("Hello world.")));
    assert_eq!(tag_content(&meta, "og:type"), Some(&json!("article")));
    assert_eq!(
        tag_content(&meta, "og:url"),
        Some(&json!("https://example.com/hello/"))
    );
    assert_eq!(
        tag_content(&meta, "og:image"),
        Some(&json!("https://example.com/thumb.png"))
    );
    assert_eq!(
        tag_content(&meta, "twitter:card"),
        Some(&json!("summary_large_image"))
    );
    assert_eq!(
        tag_content(&meta, "google-site-verification"),
        Some(&json!("google-token"))
    );
    // Probing is disabled in this harness.
    assert!(tag_content(&meta, "og:image:width").is_none());

    Ok(())
}

#[tokio::test]
async fn test_item_meta_prefers_overrides() -> Result<()> {
    // Arrange
    let app = TestApp::spawn(SITE_YAML).await?;

    // Act
    let meta: Value = app.get("/items/3/meta").await?.json().await?;
    let front: Value = app.get("/items/1/meta").await?.json().await?;

    // Assert
    assert_eq!(meta["title"], "Custom title");
    assert_eq!(tag_content(&meta, "og:title"), Some(&json!("Custom OG title")));
    // An empty override falls back to the resolved title.
    assert_eq!(tag_content(&meta, "twitter:title"), Some(&json!("Custom title")));
    assert_eq!(
        tag_content(&meta, "twitter:image"),
        Some(&json!("https://cdn.example.com/twitter.png"))
    );
    assert_eq!(front["title"], "Site");

    Ok(())
}

#[tokio::test]
async fn test_item_response_carries_meta_field() -> Result<()> {
    // Arrange
    let app = TestApp::spawn(SITE_YAML).await?;

    // Act
    let body: Value = app.get("/items/2").await?.json().await?;

    // Assert
    assert_eq!(body["id"], 2);
    assert_eq!(body["title"], "Hello");
    assert_eq!(body["link"], "https://example.com/hello/");
    assert_eq!(body["meta"]["title"], "Hello - Site");

    Ok(())
}

#[tokio::test]
async fn test_meta_field_can_be_disabled() -> Result<()> {
    // Arrange
    let app = TestApp::spawn_with(
        MockServer::start(),
        SITE_YAML,
        "probe:\n  enabled: false\nrest:\n  expose_meta_field: false\n",
    )
    .await?;

    // Act
    let body: Value = app.get("/items/2").await?.json().await?;
    let meta_response = app.get("/items/2/meta").await?;

    // Assert
    assert_eq!(body["title"], "Hello");
    assert!(body.get("meta").is_none());
    assert!(app.app_state.fields.fields_for("post").is_empty());
    // The dedicated endpoint is unaffected.
    assert_eq!(meta_response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_collection_meta_defaults() -> Result<()> {
    // Arrange
    let app = TestApp::spawn(SITE_YAML).await?;

    // Act
    let meta: Value = app.get("/collections/post/meta").await?.json().await?;

    // Assert
    assert_eq!(meta["title"], "Blog - Site");
    assert_eq!(tag_content(&meta, "og:type"), Some(&json!("summary")));
    assert_eq!(tag_content(&meta, "twitter:card"), Some(&json!("summary")));
    // The most recently modified post leads the collection.
    assert_eq!(
        tag_content(&meta, "description"),
        Some(&json!("Body that nobody reads."))
    );
    assert_eq!(
        tag_content(&meta, "og:url"),
        Some(&json!("https://example.com/edited/"))
    );

    Ok(())
}

#[tokio::test]
async fn test_collection_title_from_config() -> Result<()> {
    // Arrange
    let app = TestApp::spawn_with(
        MockServer::start(),
        SITE_YAML,
        "probe:\n  enabled: false\nrest:\n  collection_titles:\n    event: \"What's on\"\n",
    )
    .await?;

    // Act
    let events: Value = app.get("/collections/event/meta").await?.json().await?;
    let pages: Value = app.get("/collections/page/meta").await?.json().await?;

    // Assert
    assert_eq!(events["title"], "What's on");
    assert_eq!(tag_content(&events, "og:title"), Some(&json!("What's on")));
    assert_eq!(pages["title"], "Pages - Site");

    Ok(())
}

#[tokio::test]
async fn test_item_meta_includes_probed_dimensions() -> Result<()> {
    // Arrange
    let mock_server = MockServer::start();
    let logo_mock_id = mock_server
        .mock(|when, then| {
            when.method(GET).path("/logo.png");
            then.status(200)
                .header("content-type", "image/png")
                .body(png_bytes(40, 30));
        })
        .id;
    let logo_url = mock_server.url("/logo.png");
    let site = site_yaml_with_logo(&logo_url);
    let app = TestApp::spawn_with(mock_server, &site, "probe:\n  timeout_secs: 2\n").await?;

    // Act
    let meta: Value = app.get("/items/10/meta").await?.json().await?;

    // Assert
    assert_eq!(tag_content(&meta, "og:image"), Some(&json!(logo_url)));
    assert_eq!(tag_content(&meta, "og:image:width"), Some(&json!(40)));
    assert_eq!(tag_content(&meta, "og:image:height"), Some(&json!(30)));
    assert_eq!(tag_content(&meta, "twitter:image:width"), Some(&json!(40)));
    // Both image tags share one URL, which is fetched once.
    let logo_mock = Mock::new(logo_mock_id, &app.mock_server);
    logo_mock.assert_hits(1);

    Ok(())
}

#[tokio::test]
async fn test_unreadable_image_omits_dimensions() -> Result<()> {
    // Arrange
    let mock_server = MockServer::start();
    mock_server.mock(|when, then| {
        when.method(GET).path("/logo.png");
        then.status(404);
    });
    let site = site_yaml_with_logo(&mock_server.url("/logo.png"));
    let app = TestApp::spawn_with(mock_server, &site, "").await?;

    // Act
    let response = app.get("/items/10/meta").await?;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let meta: Value = response.json().await?;
    assert!(tag_content(&meta, "og:image").is_some());
    assert!(tag_content(&meta, "og:image:width").is_none());
    assert!(tag_content(&meta, "twitter:image:height").is_none());

    Ok(())
}
