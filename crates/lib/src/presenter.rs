//! # Metadata Presenter
//!
//! Turns resolved fields into the ordered tag list. The only fallible step is
//! the optional image-dimension probe, which degrades to omitting the
//! width/height tags.

use crate::constants::{COLLECTION_OG_TYPE, DEFAULT_TWITTER_CARD, POST_OG_TYPE};
use crate::providers::ImageProbe;
use crate::resolvers::{CollectionFields, PostFields};
use crate::types::{ImageDimensions, MetaTag, MetadataResult, TagKind};
use tracing::warn;

/// Assembles a post's tags in rendering order.
///
/// Image tags are present only for images that resolved; their width and
/// height follow only when dimensions are known.
///
/// The eleven fixed tags are always emitted, even when a value resolved to an
/// empty string (an empty body with no override yields an empty `description`).
pub fn assemble_post(
    fields: &PostFields,
    og_dimensions: Option<ImageDimensions>,
    twitter_dimensions: Option<ImageDimensions>,
) -> MetadataResult {
    let mut tags = vec![
        MetaTag::name("description", &fields.description),
        MetaTag::property("og:locale", &fields.locale),
        MetaTag::property("og:type", POST_OG_TYPE),
        MetaTag::property("og:title", &fields.og_title),
        MetaTag::property("og:description", &fields.og_description),
        MetaTag::property("og:url", &fields.permalink),
        MetaTag::property("og:site_name", &fields.site_name),
        MetaTag::property("og:updated_time", &fields.updated_time),
        MetaTag::name("twitter:card", &fields.twitter_card),
        MetaTag::name("twitter:title", &fields.twitter_title),
        MetaTag::name("twitter:description", &fields.twitter_description),
    ];

    if let Some(image) = &fields.og_image {
        push_image(&mut tags, TagKind::Property, "og", image, og_dimensions);
    }
    if let Some(image) = &fields.twitter_image {
        push_image(&mut tags, TagKind::Name, "twitter", image, twitter_dimensions);
    }

    tags.extend(fields.verification.iter().cloned());

    MetadataResult {
        title: fields.title.clone(),
        tags,
    }
}

/// Assembles a collection page's tags in rendering order.
pub fn assemble_collection(fields: &CollectionFields) -> MetadataResult {
    let mut tags = vec![
        MetaTag::name("description", &fields.description),
        MetaTag::property("og:locale", &fields.locale),
        MetaTag::property("og:type", COLLECTION_OG_TYPE),
        MetaTag::property("og:title", &fields.title),
        MetaTag::property("og:description", &fields.description),
        MetaTag::property("og:url", &fields.permalink),
        MetaTag::property("og:site_name", &fields.site_name),
        MetaTag::name("twitter:card", DEFAULT_TWITTER_CARD),
        MetaTag::name("twitter:title", &fields.title),
        MetaTag::name("twitter:description", &fields.description),
    ];
    tags.extend(fields.verification.iter().cloned());

    MetadataResult {
        title: fields.title.clone(),
        tags,
    }
}

/// Probes the post's images (when a probe is available) and assembles the
/// result. An image shared by both cards is probed once.
pub async fn present_post(fields: &PostFields, probe: Option<&dyn ImageProbe>) -> MetadataResult {
    let Some(probe) = probe else {
        return assemble_post(fields, None, None);
    };

    let (og_dimensions, twitter_dimensions) = match (&fields.og_image, &fields.twitter_image) {
        (Some(og), Some(twitter)) if og == twitter => {
            let dimensions = probe_soft(probe, og).await;
            (dimensions, dimensions)
        }
        (og, twitter) => {
            futures::join!(
                probe_optional(probe, og.as_deref()),
                probe_optional(probe, twitter.as_deref())
            )
        }
    };

    assemble_post(fields, og_dimensions, twitter_dimensions)
}

fn push_image(
    tags: &mut Vec<MetaTag>,
    kind: TagKind,
    prefix: &str,
    image: &str,
    dimensions: Option<ImageDimensions>,
) {
    let key = format!("{prefix}:image");
    tags.push(match kind {
        TagKind::Name => MetaTag::name(&key, image),
        TagKind::Property => MetaTag::property(&key, image),
    });
    if let Some(dimensions) = dimensions {
        tags.push(MetaTag::numeric(kind, format!("{key}:width"), dimensions.width));
        tags.push(MetaTag::numeric(kind, format!("{key}:height"), dimensions.height));
    }
}

async fn probe_optional(probe: &dyn ImageProbe, url: Option<&str>) -> Option<ImageDimensions> {
    match url {
        Some(url) => probe_soft(probe, url).await,
        None => None,
    }
}

async fn probe_soft(probe: &dyn ImageProbe, url: &str) -> Option<ImageDimensions> {
    match probe.probe(url).await {
        Ok(dimensions) => Some(dimensions),
        Err(e) => {
            warn!(url, error = %e, "Image probe failed; omitting dimension tags");
            None
        }
    }
}
