//! # Metadata Resolvers
//!
//! Each resolver walks the fallback chain of every field it owns and hands
//! the resolved values to the presenter. Post and collection pages are the
//! only two variants; `MetadataClient::resolve` picks one from a
//! `MetadataTarget`.

pub mod collection;
pub mod post;

pub use collection::{CollectionFields, CollectionMetadataResolver};
pub use post::{PostFields, PostMetadataResolver};

use crate::constants::DESCRIPTION_CHAR_LIMIT;
use crate::text::{strip_markup, trim_to_word_boundary};

/// The description derived from a body when no editor has written one.
pub(crate) fn derive_description(body: &str) -> String {
    trim_to_word_boundary(&strip_markup(body), DESCRIPTION_CHAR_LIMIT)
}

/// Treats empty strings as absent.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
