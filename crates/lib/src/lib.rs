//! # SEO Metadata Resolution
//!
//! This crate computes the title and meta tags (description, Open Graph,
//! Twitter card and webmaster verification) for content items and for the
//! listing pages of content types.
//!
//! Values entered through an SEO plugin's editorial UI take precedence. When
//! an editor has left a field empty, the resolvers fall back to derived
//! defaults: the item title plus site name, a word-boundary-safe excerpt of
//! the body, the item thumbnail, the site logo or the site icon.
//!
//! All host data is read through the traits in [`providers`]; [`MemoryStore`]
//! implements them from a YAML site document.

pub mod constants;
pub mod errors;
pub mod hooks;
pub mod fallback;
pub mod presenter;
pub mod providers;
pub mod resolvers;
pub mod rest;
pub mod text;
pub mod types;
pub mod verification;

pub use errors::MetadataError;
pub use hooks::MetadataHooks;
pub use providers::{HttpImageProbe, MemoryStore};
pub use types::{
    CollectionDescriptor, ContentItem, ImageDimensions, ItemId, MetaTag, MetadataClient,
    MetadataClientBuilder, MetadataResult, MetadataTarget, OverrideField, SiteIdentity,
    SocialSettings, TagContent, TagKind,
};

use presenter::present_post;
use resolvers::{CollectionMetadataResolver, PostMetadataResolver};
use tracing::info;

impl MetadataClient {
    /// Resolves metadata for a post or a collection page.
    pub async fn resolve(&self, target: &MetadataTarget) -> Result<MetadataResult, MetadataError> {
        match target {
            MetadataTarget::Post(id) => self.resolve_post(*id).await,
            MetadataTarget::Collection(type_id) => self.resolve_collection(type_id),
        }
    }

    /// Looks up an item and resolves its metadata.
    pub async fn resolve_post(&self, id: ItemId) -> Result<MetadataResult, MetadataError> {
        let item = self.repository.get_item(id)?;
        self.resolve_post_item(&item).await
    }

    /// Resolves metadata for an item the caller already holds, including the
    /// image-dimension enrichment when an image probe is configured.
    pub async fn resolve_post_item(
        &self,
        item: &ContentItem,
    ) -> Result<MetadataResult, MetadataError> {
        info!(item_id = item.id, "[resolve_post] Resolving post metadata");
        let site = self.site.site_identity();
        let fields = PostMetadataResolver::new(
            self.repository.as_ref(),
            self.overrides.as_ref(),
            self.options.as_ref(),
            &self.hooks,
        )
        .resolve_fields(item, &site)?;

        Ok(present_post(&fields, self.image_probe.as_deref()).await)
    }

    /// Resolves metadata for the listing page of `type_id`.
    pub fn resolve_collection(&self, type_id: &str) -> Result<MetadataResult, MetadataError> {
        info!(type_id, "[resolve_collection] Resolving collection metadata");
        let descriptor = self.repository.get_type_descriptor(type_id)?;
        let lead_item = self.repository.get_lead_item(type_id)?;
        let site = self.site.site_identity();

        CollectionMetadataResolver::new(self.repository.as_ref(), self.options.as_ref(), &self.hooks)
            .resolve(&descriptor, &lead_item, &site)
    }
}
