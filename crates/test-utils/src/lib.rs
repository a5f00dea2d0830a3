use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use image::{ImageBuffer, ImageFormat, Rgba};
use seometa::errors::MetadataError;
use seometa::providers::ImageProbe;
use seometa::{ContentItem, ImageDimensions, MemoryStore};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

// --- Site Fixtures ---

/// A site document covering the common cases: a front page, a post with a
/// thumbnail, a post with full editorial overrides and a post with nothing
/// but a body.
pub const SITE_YAML: &str = r#"
base_url: "https://example.com/"
front_page_id: 1
seo_plugin_active: true
site:
  name: "Site"
  locale: "en_US"
  logo_url: "https://example.com/logo.png"
  icon_url: "https://example.com/icon.png"
verification:
  googleverify: "google-token"
  msverify: ""
  company_name: "ACME"
social:
  twitter_card_type: "summary_large_image"
types:
  - type_id: "page"
    plural_label: "Pages"
  - type_id: "event"
    plural_label: "Events"
items:
  - id: 1
    type_id: "page"
    slug: "home"
    title: "Home"
    body: "<p>Welcome to the site.</p>"
    modified: "2024-01-01T09:00:00Z"
  - id: 2
    type_id: "post"
    slug: "hello"
    title: "Hello"
    body: "<p>Hello <strong>world</strong>.</p><script>track()</script>"
    modified: "2024-02-01T10:30:00Z"
    thumbnail_url: "https://example.com/thumb.png"
  - id: 3
    type_id: "post"
    slug: "edited"
    title: "Edited"
    body: "Body that nobody reads."
    modified: "2024-03-01T08:00:00Z"
    overrides:
      title: "Custom title"
      description: "Custom description"
      og_title: "Custom OG title"
      _yoast_wpseo_opengraph-description: "Custom OG description"
      og_image: "https://cdn.example.com/og.png"
      twitter_title: ""
      twitter_image: "https://cdn.example.com/twitter.png"
  - id: 4
    type_id: "event"
    title: "Plain"
    body: "Plain body"
    modified: "2023-12-24T18:00:00Z"
"#;

/// Loads [`SITE_YAML`] into a shared store.
pub fn sample_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::from_yaml_str(SITE_YAML).expect("SITE_YAML must parse"))
}

/// A minimal site document whose logo points at `logo_url` and whose only
/// item (id 10, type `post`) has no thumbnail.
pub fn site_yaml_with_logo(logo_url: &str) -> String {
    format!(
        r#"
base_url: "https://example.com/"
site:
  name: "Site"
  locale: "en_US"
  logo_url: "{logo_url}"
items:
  - id: 10
    type_id: "post"
    slug: "no-thumb"
    title: "No thumb"
    body: "Text"
    modified: "2024-05-05T05:05:05Z"
"#
    )
}

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Builds a content item with sensible defaults.
pub fn content_item(id: u64, type_id: &str, title: &str, body: &str) -> ContentItem {
    ContentItem {
        id,
        type_id: type_id.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        modified: fixed_time(),
        thumbnail_url: None,
    }
}

/// Encodes a blank PNG of the given size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let buffer: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::new(width, height);
    let mut bytes = Cursor::new(Vec::new());
    buffer
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("PNG encoding should not fail");
    bytes.into_inner()
}

// --- Mock Image Probe ---

/// An `ImageProbe` that answers from a table and records every URL it was
/// asked about. Unknown URLs fail, like an unreachable image would.
#[derive(Clone, Debug, Default)]
pub struct MockImageProbe {
    dimensions: Arc<Mutex<HashMap<String, ImageDimensions>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockImageProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-programs the dimensions reported for `url`.
    pub fn add_image(&self, url: &str, width: u32, height: u32) {
        self.dimensions
            .lock()
            .unwrap()
            .insert(url.to_string(), ImageDimensions { width, height });
    }

    /// Retrieves the probed URLs for assertion.
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageProbe for MockImageProbe {
    async fn probe(&self, url: &str) -> Result<ImageDimensions, MetadataError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.dimensions
            .lock()
            .unwrap()
            .get(url)
            .copied()
            .ok_or_else(|| MetadataError::ProbeDecode(format!("MockImageProbe: no image for '{url}'")))
    }
}
