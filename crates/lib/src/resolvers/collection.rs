use super::derive_description;
use crate::errors::MetadataError;
use crate::hooks::MetadataHooks;
use crate::presenter::assemble_collection;
use crate::providers::{ContentRepository, OptionStore};
use crate::types::{CollectionDescriptor, ContentItem, MetaTag, MetadataResult, SiteIdentity};
use tracing::debug;

/// Every resolved field of a collection page, before presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionFields {
    pub title: String,
    pub description: String,
    pub locale: String,
    pub permalink: String,
    pub site_name: String,
    pub verification: Vec<MetaTag>,
}

/// Resolves the metadata of a content type's listing page.
///
/// Collections carry no editorial record of their own: the description comes
/// from the lead item's body and the title from the type's label.
pub struct CollectionMetadataResolver<'a> {
    repository: &'a dyn ContentRepository,
    options: &'a dyn OptionStore,
    hooks: &'a MetadataHooks,
}

impl<'a> CollectionMetadataResolver<'a> {
    pub fn new(
        repository: &'a dyn ContentRepository,
        options: &'a dyn OptionStore,
        hooks: &'a MetadataHooks,
    ) -> Self {
        Self {
            repository,
            options,
            hooks,
        }
    }

    pub fn resolve(
        &self,
        descriptor: &CollectionDescriptor,
        lead_item: &ContentItem,
        site: &SiteIdentity,
    ) -> Result<MetadataResult, MetadataError> {
        let fields = self.resolve_fields(descriptor, lead_item, site)?;
        Ok(assemble_collection(&fields))
    }

    pub fn resolve_fields(
        &self,
        descriptor: &CollectionDescriptor,
        lead_item: &ContentItem,
        site: &SiteIdentity,
    ) -> Result<CollectionFields, MetadataError> {
        let title = self.hooks.apply_collection_title(
            format!("{} - {}", descriptor.plural_label, site.name),
            descriptor,
        );
        debug!(
            type_id = %descriptor.type_id,
            lead_item_id = lead_item.id,
            %title,
            "Resolved collection metadata fields"
        );

        Ok(CollectionFields {
            title,
            description: derive_description(&lead_item.body),
            locale: site.locale.clone(),
            permalink: self.repository.get_permalink(lead_item.id)?,
            site_name: site.name.clone(),
            verification: crate::verification::collect_verification_tags(
                self.options.get_verification_options(),
            ),
        })
    }
}
