use super::{derive_description, present};
use crate::constants::DEFAULT_TWITTER_CARD;
use crate::errors::MetadataError;
use crate::hooks::MetadataHooks;
use crate::fallback::resolve_fallback_image;
use crate::presenter::assemble_post;
use crate::providers::{ContentRepository, OptionStore, OverrideStore};
use crate::types::{ContentItem, MetaTag, MetadataResult, OverrideField, SiteIdentity};
use chrono::SecondsFormat;
use tracing::debug;

/// Every resolved field of a single post, before presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub description: String,
    pub locale: String,
    pub og_title: String,
    pub og_description: String,
    pub permalink: String,
    pub site_name: String,
    pub updated_time: String,
    pub twitter_card: String,
    pub twitter_title: String,
    pub twitter_description: String,
    pub og_image: Option<String>,
    pub twitter_image: Option<String>,
    pub verification: Vec<MetaTag>,
}

/// Resolves the metadata of a single content item.
///
/// Every overridable field first consults the editorial override store and
/// falls back to a derived value when the override is absent or empty.
pub struct PostMetadataResolver<'a> {
    repository: &'a dyn ContentRepository,
    overrides: &'a dyn OverrideStore,
    options: &'a dyn OptionStore,
    hooks: &'a MetadataHooks,
}

impl<'a> PostMetadataResolver<'a> {
    pub fn new(
        repository: &'a dyn ContentRepository,
        overrides: &'a dyn OverrideStore,
        options: &'a dyn OptionStore,
        hooks: &'a MetadataHooks,
    ) -> Self {
        Self {
            repository,
            overrides,
            options,
            hooks,
        }
    }

    /// Resolves all fields and assembles them without image dimensions.
    pub fn resolve(
        &self,
        item: &ContentItem,
        site: &SiteIdentity,
    ) -> Result<MetadataResult, MetadataError> {
        let fields = self.resolve_fields(item, site)?;
        Ok(assemble_post(&fields, None, None))
    }

    pub fn resolve_fields(
        &self,
        item: &ContentItem,
        site: &SiteIdentity,
    ) -> Result<PostFields, MetadataError> {
        let title = self.title(item, site);
        let description = self.description(item);

        let og_title = self
            .stored(item, OverrideField::OgTitle)
            .unwrap_or_else(|| title.clone());
        let og_description = self
            .stored(item, OverrideField::OgDescription)
            .unwrap_or_else(|| description.clone());
        let twitter_title = self
            .stored(item, OverrideField::TwitterTitle)
            .unwrap_or_else(|| title.clone());
        let twitter_description = self
            .stored(item, OverrideField::TwitterDescription)
            .unwrap_or_else(|| description.clone());

        let og_image = present(
            self.hooks
                .apply_og_image(self.stored(item, OverrideField::OgImage), item),
        )
        .or_else(|| fallback_image(item, site));
        let twitter_image = present(
            self.hooks
                .apply_twitter_image(self.stored(item, OverrideField::TwitterImage), item),
        )
        .or_else(|| fallback_image(item, site));

        let twitter_card = present(self.options.get_social_settings().twitter_card_type)
            .unwrap_or_else(|| DEFAULT_TWITTER_CARD.to_string());

        debug!(
            item_id = item.id,
            %title,
            og_image = ?og_image,
            twitter_image = ?twitter_image,
            "Resolved post metadata fields"
        );

        Ok(PostFields {
            title,
            description,
            locale: site.locale.clone(),
            og_title,
            og_description,
            permalink: self.repository.get_permalink(item.id)?,
            site_name: site.name.clone(),
            updated_time: item.modified.to_rfc3339_opts(SecondsFormat::Secs, false),
            twitter_card,
            twitter_title,
            twitter_description,
            og_image,
            twitter_image,
            verification: crate::verification::collect_verification_tags(
                self.options.get_verification_options(),
            ),
        })
    }

    fn stored(&self, item: &ContentItem, field: OverrideField) -> Option<String> {
        present(self.overrides.get_override(item.id, field))
    }

    fn title(&self, item: &ContentItem, site: &SiteIdentity) -> String {
        if let Some(title) = self.stored(item, OverrideField::Title) {
            return title;
        }
        if self.repository.get_front_page_id() == Some(item.id) {
            site.name.clone()
        } else {
            format!("{} - {}", item.title, site.name)
        }
    }

    fn description(&self, item: &ContentItem) -> String {
        self.stored(item, OverrideField::Description)
            .unwrap_or_else(|| derive_description(&item.body))
    }
}

fn fallback_image(item: &ContentItem, site: &SiteIdentity) -> Option<String> {
    resolve_fallback_image(
        item.thumbnail_url.as_deref(),
        site.logo_url.as_deref(),
        site.icon_url.as_deref(),
    )
}
