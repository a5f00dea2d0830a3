//! # In-Memory Site Store
//!
//! A `MemoryStore` holds a snapshot of a site (identity, options, content types,
//! items and their editorial overrides) loaded from a YAML site document. It
//! implements every synchronous collaborator trait, which makes it the backing
//! store for the server and for tests.
//!
//! ```yaml
//! base_url: "https://example.com/"
//! front_page_id: 1
//! seo_plugin_active: true
//! site:
//!   name: "Example"
//!   locale: "en_US"
//!   logo_url: "https://example.com/logo.png"
//! verification:
//!   googleverify: "abc"
//! social:
//!   twitter_card_type: "summary_large_image"
//! types:
//!   - type_id: "page"
//!     plural_label: "Pages"
//! items:
//!   - id: 1
//!     type_id: "page"
//!     slug: "home"
//!     title: "Home"
//!     body: "<p>Welcome</p>"
//!     modified: "2024-01-01T00:00:00Z"
//!     overrides:
//!       og_title: "Welcome home"
//! ```

use crate::constants::{BLOG_COLLECTION_LABEL, BLOG_POST_TYPE};
use crate::errors::MetadataError;
use crate::providers::{ContentRepository, OptionStore, OverrideStore, SiteStore};
use crate::types::{
    CollectionDescriptor, ContentItem, ItemId, OverrideField, SiteIdentity, SocialSettings,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, warn};
use url::Url;

/// The on-disk shape of a site document.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteDocument {
    pub base_url: String,
    pub site: SiteIdentity,
    #[serde(default)]
    pub front_page_id: Option<ItemId>,
    #[serde(default)]
    pub seo_plugin_active: bool,
    #[serde(default)]
    pub verification: BTreeMap<String, String>,
    #[serde(default)]
    pub social: SocialSettings,
    #[serde(default)]
    pub types: Vec<CollectionDescriptor>,
    #[serde(default)]
    pub items: Vec<StoredItem>,
}

/// An item as written in a site document.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredItem {
    pub id: ItemId,
    pub type_id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    /// Editorial overrides keyed by field name (`og_image`) or meta key
    /// (`_yoast_wpseo_opengraph-image`).
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct MemoryStore {
    base_url: Url,
    site: SiteIdentity,
    front_page_id: Option<ItemId>,
    seo_plugin_active: bool,
    verification: BTreeMap<String, String>,
    social: SocialSettings,
    types: Vec<CollectionDescriptor>,
    items: BTreeMap<ItemId, ContentItem>,
    slugs: HashMap<ItemId, String>,
    overrides: HashMap<(ItemId, OverrideField), String>,
}

impl MemoryStore {
    /// Builds a store from a parsed site document.
    pub fn from_document(document: SiteDocument) -> Result<Self, MetadataError> {
        let base_url = Url::parse(&document.base_url)?;

        let mut types = document.types;
        if !types.iter().any(|t| t.type_id == BLOG_POST_TYPE) {
            types.insert(
                0,
                CollectionDescriptor {
                    type_id: BLOG_POST_TYPE.to_string(),
                    plural_label: BLOG_COLLECTION_LABEL.to_string(),
                },
            );
        }

        let mut items = BTreeMap::new();
        let mut slugs = HashMap::new();
        let mut overrides = HashMap::new();
        for stored in document.items {
            for (name, value) in stored.overrides {
                match OverrideField::from_name(&name) {
                    Some(field) => {
                        overrides.insert((stored.id, field), value);
                    }
                    None => warn!(item_id = stored.id, field = %name, "Ignoring unknown override field"),
                }
            }
            if let Some(slug) = stored.slug {
                slugs.insert(stored.id, slug);
            }
            items.insert(
                stored.id,
                ContentItem {
                    id: stored.id,
                    type_id: stored.type_id,
                    title: stored.title,
                    body: stored.body,
                    modified: stored.modified,
                    thumbnail_url: stored.thumbnail_url,
                },
            );
        }

        debug!(
            items = items.len(),
            types = types.len(),
            "Loaded site document into memory store"
        );

        Ok(Self {
            base_url,
            site: document.site,
            front_page_id: document.front_page_id,
            seo_plugin_active: document.seo_plugin_active,
            verification: document.verification,
            social: document.social,
            types,
            items,
            slugs,
            overrides,
        })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, MetadataError> {
        let document: SiteDocument = serde_yaml::from_str(yaml)?;
        Self::from_document(document)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MetadataError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}

impl ContentRepository for MemoryStore {
    fn get_item(&self, id: ItemId) -> Result<ContentItem, MetadataError> {
        self.items
            .get(&id)
            .cloned()
            .ok_or(MetadataError::ItemNotFound(id))
    }

    fn get_permalink(&self, id: ItemId) -> Result<String, MetadataError> {
        if !self.items.contains_key(&id) {
            return Err(MetadataError::ItemNotFound(id));
        }
        if self.front_page_id == Some(id) {
            return Ok(self.base_url.to_string());
        }
        let path = match self.slugs.get(&id) {
            Some(slug) => format!("{}/", slug.trim_matches('/')),
            None => format!("?p={id}"),
        };
        Ok(self.base_url.join(&path)?.to_string())
    }

    fn get_type_descriptor(&self, type_id: &str) -> Result<CollectionDescriptor, MetadataError> {
        self.types
            .iter()
            .find(|t| t.type_id == type_id)
            .cloned()
            .ok_or_else(|| MetadataError::TypeNotFound(type_id.to_string()))
    }

    fn get_front_page_id(&self) -> Option<ItemId> {
        self.front_page_id
    }

    fn get_lead_item(&self, type_id: &str) -> Result<ContentItem, MetadataError> {
        self.items
            .values()
            .filter(|item| item.type_id == type_id)
            .max_by_key(|item| (item.modified, item.id))
            .cloned()
            .ok_or_else(|| MetadataError::NoLeadItem(type_id.to_string()))
    }

    fn content_types(&self) -> Vec<CollectionDescriptor> {
        self.types.clone()
    }
}

impl OverrideStore for MemoryStore {
    fn get_override(&self, item_id: ItemId, field: OverrideField) -> Option<String> {
        self.overrides.get(&(item_id, field)).cloned()
    }
}

impl SiteStore for MemoryStore {
    fn site_identity(&self) -> SiteIdentity {
        self.site.clone()
    }
}

impl OptionStore for MemoryStore {
    fn get_verification_options(&self) -> Vec<(String, String)> {
        if !self.seo_plugin_active {
            return Vec::new();
        }
        self.verification
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn get_social_settings(&self) -> SocialSettings {
        self.social.clone()
    }
}
