//! # Collaborator Interfaces
//!
//! The read-only host services the resolvers consume. The content repository,
//! override store, site store and option store are synchronous lookups; the
//! image probe performs I/O and is async.

pub mod memory;
pub mod probe;

use crate::errors::MetadataError;
use crate::types::{
    CollectionDescriptor, ContentItem, ImageDimensions, ItemId, OverrideField, SiteIdentity,
    SocialSettings,
};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

pub use memory::MemoryStore;
pub use probe::HttpImageProbe;

/// Post storage, permalinks and the type registry.
pub trait ContentRepository: Send + Sync + Debug {
    fn get_item(&self, id: ItemId) -> Result<ContentItem, MetadataError>;

    fn get_permalink(&self, id: ItemId) -> Result<String, MetadataError>;

    fn get_type_descriptor(&self, type_id: &str) -> Result<CollectionDescriptor, MetadataError>;

    /// The item configured as the site's front page, if any.
    fn get_front_page_id(&self) -> Option<ItemId>;

    /// The item used to seed a collection page: the most recently modified
    /// item of `type_id`.
    fn get_lead_item(&self, type_id: &str) -> Result<ContentItem, MetadataError>;

    /// Every content type exposed by the host's API layer.
    fn content_types(&self) -> Vec<CollectionDescriptor>;
}

/// Per-item values entered through the SEO plugin's editorial UI.
pub trait OverrideStore: Send + Sync + Debug {
    /// Returns the stored value, if any. An empty string is returned as-is;
    /// resolvers treat it as "not set".
    fn get_override(&self, item_id: ItemId, field: OverrideField) -> Option<String>;
}

/// Site identity storage.
pub trait SiteStore: Send + Sync + Debug {
    fn site_identity(&self) -> SiteIdentity;
}

/// SEO plugin options.
pub trait OptionStore: Send + Sync + Debug {
    /// Raw verification options, in a stable order. Empty when the SEO plugin
    /// is not active.
    fn get_verification_options(&self) -> Vec<(String, String)>;

    fn get_social_settings(&self) -> SocialSettings;
}

/// Reads the pixel dimensions of a remote image.
///
/// Implementations must not retry. Callers treat any error as "dimensions
/// unknown".
#[async_trait]
pub trait ImageProbe: Send + Sync + Debug + DynClone {
    async fn probe(&self, url: &str) -> Result<ImageDimensions, MetadataError>;
}

dyn_clone::clone_trait_object!(ImageProbe);
