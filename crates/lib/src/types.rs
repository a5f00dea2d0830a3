use crate::errors::MetadataError;
use crate::hooks::MetadataHooks;
use crate::providers::{ContentRepository, ImageProbe, OptionStore, OverrideStore, SiteStore};
use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Identifier of a content item in the host repository.
pub type ItemId = u64;

/// A single post, page or custom-type entry, as read from the content repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,
    /// The owning content type (e.g. `post`, `page`).
    pub type_id: String,
    pub title: String,
    /// Raw body text; may contain markup.
    #[serde(default)]
    pub body: String,
    pub modified: DateTime<Utc>,
    /// Resolved URL of the item's thumbnail attachment, if it has one.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// A content type as known to the repository's type registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionDescriptor {
    pub type_id: String,
    pub plural_label: String,
}

/// Process-wide site identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteIdentity {
    pub name: String,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
}

/// Social settings stored by the SEO plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialSettings {
    #[serde(default)]
    pub twitter_card_type: Option<String>,
}

/// Pixel dimensions reported by an `ImageProbe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// The post fields an editor can override through the SEO plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverrideField {
    Title,
    Description,
    OgTitle,
    OgDescription,
    OgImage,
    TwitterTitle,
    TwitterDescription,
    TwitterImage,
}

impl OverrideField {
    pub const ALL: [OverrideField; 8] = [
        OverrideField::Title,
        OverrideField::Description,
        OverrideField::OgTitle,
        OverrideField::OgDescription,
        OverrideField::OgImage,
        OverrideField::TwitterTitle,
        OverrideField::TwitterDescription,
        OverrideField::TwitterImage,
    ];

    /// The post meta key under which the SEO plugin stores this field.
    pub fn meta_key(self) -> &'static str {
        match self {
            OverrideField::Title => "_yoast_wpseo_title",
            OverrideField::Description => "_yoast_wpseo_metadesc",
            OverrideField::OgTitle => "_yoast_wpseo_opengraph-title",
            OverrideField::OgDescription => "_yoast_wpseo_opengraph-description",
            OverrideField::OgImage => "_yoast_wpseo_opengraph-image",
            OverrideField::TwitterTitle => "_yoast_wpseo_twitter-title",
            OverrideField::TwitterDescription => "_yoast_wpseo_twitter-description",
            OverrideField::TwitterImage => "_yoast_wpseo_twitter-image",
        }
    }

    /// Looks a field up by its short name (`og_image`) or its stored meta key.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| {
            field.meta_key() == name || field.short_name() == name
        })
    }

    fn short_name(self) -> &'static str {
        match self {
            OverrideField::Title => "title",
            OverrideField::Description => "description",
            OverrideField::OgTitle => "og_title",
            OverrideField::OgDescription => "og_description",
            OverrideField::OgImage => "og_image",
            OverrideField::TwitterTitle => "twitter_title",
            OverrideField::TwitterDescription => "twitter_description",
            OverrideField::TwitterImage => "twitter_image",
        }
    }
}

/// Whether a tag is rendered as `<meta name=..>` or `<meta property=..>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Name,
    Property,
}

impl TagKind {
    pub fn attribute(self) -> &'static str {
        match self {
            TagKind::Name => "name",
            TagKind::Property => "property",
        }
    }
}

/// The `content` of a meta tag. Image dimensions are numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TagContent {
    Text(String),
    Number(u32),
}

impl fmt::Display for TagContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagContent::Text(text) => f.write_str(text),
            TagContent::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One entry in the ordered tag list.
///
/// Serializes as `{"name": "description", "content": "..."}` or
/// `{"property": "og:title", "content": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub kind: TagKind,
    pub key: String,
    pub content: TagContent,
}

impl MetaTag {
    pub fn name(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: TagKind::Name,
            key: key.into(),
            content: TagContent::Text(content.into()),
        }
    }

    pub fn property(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: TagKind::Property,
            key: key.into(),
            content: TagContent::Text(content.into()),
        }
    }

    pub fn numeric(kind: TagKind, key: impl Into<String>, value: u32) -> Self {
        Self {
            kind,
            key: key.into(),
            content: TagContent::Number(value),
        }
    }
}

impl Serialize for MetaTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.kind.attribute(), &self.key)?;
        map.serialize_entry("content", &self.content)?;
        map.end()
    }
}

/// The sole output of every resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataResult {
    pub title: String,
    pub tags: Vec<MetaTag>,
}

impl MetadataResult {
    /// Returns the first tag with the given name or property.
    pub fn tag(&self, key: &str) -> Option<&MetaTag> {
        self.tags.iter().find(|tag| tag.key == key)
    }

    /// Returns the textual content of the first tag with the given key.
    pub fn content(&self, key: &str) -> Option<String> {
        self.tag(key).map(|tag| tag.content.to_string())
    }

    /// The tag keys in rendering order.
    pub fn keys(&self) -> Vec<&str> {
        self.tags.iter().map(|tag| tag.key.as_str()).collect()
    }
}

/// What the caller wants metadata for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataTarget {
    /// A single content item.
    Post(ItemId),
    /// The listing page of a content type.
    Collection(String),
}

/// Resolves metadata for posts and collections against a set of read-only
/// collaborators.
pub struct MetadataClient {
    pub(crate) repository: Arc<dyn ContentRepository>,
    pub(crate) overrides: Arc<dyn OverrideStore>,
    pub(crate) site: Arc<dyn SiteStore>,
    pub(crate) options: Arc<dyn OptionStore>,
    pub(crate) image_probe: Option<Box<dyn ImageProbe>>,
    pub(crate) hooks: MetadataHooks,
}

impl fmt::Debug for MetadataClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetadataClient")
            .field("repository", &self.repository)
            .field("image_probe", &self.image_probe)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}

impl MetadataClient {
    /// The content repository this client reads from.
    pub fn repository(&self) -> &dyn ContentRepository {
        self.repository.as_ref()
    }
}

/// A builder for creating `MetadataClient` instances.
#[derive(Default)]
pub struct MetadataClientBuilder {
    repository: Option<Arc<dyn ContentRepository>>,
    overrides: Option<Arc<dyn OverrideStore>>,
    site: Option<Arc<dyn SiteStore>>,
    options: Option<Arc<dyn OptionStore>>,
    image_probe: Option<Box<dyn ImageProbe>>,
    hooks: MetadataHooks,
}

impl MetadataClientBuilder {
    /// Creates a new `MetadataClientBuilder`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seometa::MetadataClientBuilder;
    ///
    /// let builder = MetadataClientBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repository(mut self, repository: Arc<dyn ContentRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn overrides(mut self, overrides: Arc<dyn OverrideStore>) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn site(mut self, site: Arc<dyn SiteStore>) -> Self {
        self.site = Some(site);
        self
    }

    pub fn options(mut self, options: Arc<dyn OptionStore>) -> Self {
        self.options = Some(options);
        self
    }

    /// Uses one store for all four collaborator roles.
    pub fn store<S>(self, store: Arc<S>) -> Self
    where
        S: ContentRepository + OverrideStore + SiteStore + OptionStore + 'static,
    {
        self.repository(store.clone())
            .overrides(store.clone())
            .site(store.clone())
            .options(store)
    }

    /// Enables image-dimension enrichment of post image tags.
    pub fn image_probe(mut self, probe: Box<dyn ImageProbe>) -> Self {
        self.image_probe = Some(probe);
        self
    }

    pub fn hooks(mut self, hooks: MetadataHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Builds the `MetadataClient`.
    ///
    /// Fails with `MetadataError::MissingProvider` if any collaborator other
    /// than the image probe has not been set.
    pub fn build(self) -> Result<MetadataClient, MetadataError> {
        Ok(MetadataClient {
            repository: self
                .repository
                .ok_or(MetadataError::MissingProvider("content repository"))?,
            overrides: self
                .overrides
                .ok_or(MetadataError::MissingProvider("override store"))?,
            site: self.site.ok_or(MetadataError::MissingProvider("site store"))?,
            options: self
                .options
                .ok_or(MetadataError::MissingProvider("option store"))?,
            image_probe: self.image_probe,
            hooks: self.hooks,
        })
    }
}
