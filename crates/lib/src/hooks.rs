//! # Extension Points
//!
//! Typed replacements for host filters. Each hook receives the current value
//! and some context and returns the value to continue with. An unregistered
//! hook behaves as the identity function.

use crate::types::{CollectionDescriptor, ContentItem};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Rewrites a post's stored image override before the fallback chain runs.
pub type ImageHook = Arc<dyn Fn(Option<String>, &ContentItem) -> Option<String> + Send + Sync>;

/// Rewrites a collection's title.
pub type TitleHook = Arc<dyn Fn(String, &CollectionDescriptor) -> String + Send + Sync>;

/// The set of registered hooks consulted during resolution.
#[derive(Clone, Default)]
pub struct MetadataHooks {
    og_image: Option<ImageHook>,
    twitter_image: Option<ImageHook>,
    collection_titles: HashMap<String, TitleHook>,
}

impl fmt::Debug for MetadataHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut titles: Vec<&String> = self.collection_titles.keys().collect();
        titles.sort();
        f.debug_struct("MetadataHooks")
            .field("og_image", &self.og_image.is_some())
            .field("twitter_image", &self.twitter_image.is_some())
            .field("collection_titles", &titles)
            .finish()
    }
}

impl MetadataHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the `og:image` hook, replacing any previous one.
    pub fn with_og_image<F>(mut self, hook: F) -> Self
    where
        F: Fn(Option<String>, &ContentItem) -> Option<String> + Send + Sync + 'static,
    {
        self.og_image = Some(Arc::new(hook));
        self
    }

    /// Registers the `twitter:image` hook, replacing any previous one.
    pub fn with_twitter_image<F>(mut self, hook: F) -> Self
    where
        F: Fn(Option<String>, &ContentItem) -> Option<String> + Send + Sync + 'static,
    {
        self.twitter_image = Some(Arc::new(hook));
        self
    }

    /// Registers a title hook for the collection of `type_id`.
    pub fn with_collection_title<F>(mut self, type_id: impl Into<String>, hook: F) -> Self
    where
        F: Fn(String, &CollectionDescriptor) -> String + Send + Sync + 'static,
    {
        self.collection_titles.insert(type_id.into(), Arc::new(hook));
        self
    }

    pub(crate) fn apply_og_image(&self, value: Option<String>, item: &ContentItem) -> Option<String> {
        match &self.og_image {
            Some(hook) => hook(value, item),
            None => value,
        }
    }

    pub(crate) fn apply_twitter_image(
        &self,
        value: Option<String>,
        item: &ContentItem,
    ) -> Option<String> {
        match &self.twitter_image {
            Some(hook) => hook(value, item),
            None => value,
        }
    }

    pub(crate) fn apply_collection_title(
        &self,
        title: String,
        descriptor: &CollectionDescriptor,
    ) -> String {
        match self.collection_titles.get(&descriptor.type_id) {
            Some(hook) => hook(title, descriptor),
            None => title,
        }
    }
}
