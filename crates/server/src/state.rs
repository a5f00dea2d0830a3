//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup: the site store, the metadata client and the
//! registry of REST fields.

use crate::config::AppConfig;
use seometa::{
    rest::{register_meta_field, FieldRegistrar, FieldRegistry},
    providers::ContentRepository,
    HttpImageProbe, MemoryStore, MetadataClient, MetadataClientBuilder, MetadataHooks,
};
use std::{sync::Arc, time::Duration};
use tracing::info;

/// The shared application state, accessible from all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The application's configuration, loaded from `config.yml`.
    pub config: Arc<AppConfig>,
    /// Resolves metadata for items and collection pages.
    pub client: Arc<MetadataClient>,
    /// Fields attached to item responses, keyed by content type.
    pub fields: Arc<FieldRegistry>,
}

/// Builds the shared application state from the configuration.
///
/// - Loads the site document named by `site_file`.
/// - Installs a title hook for each entry of `rest.collection_titles`.
/// - Enables the HTTP image probe unless `probe.enabled` is false.
/// - Registers the `meta` field when `rest.expose_meta_field` is set.
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let store = Arc::new(MemoryStore::from_path(&config.site_file)?);
    info!("Loaded site document from '{}'", config.site_file);

    let mut hooks = MetadataHooks::new();
    for (type_id, title) in &config.rest.collection_titles {
        let title = title.clone();
        hooks = hooks.with_collection_title(type_id.clone(), move |_, _| title.clone());
    }

    let mut builder = MetadataClientBuilder::new().store(store.clone()).hooks(hooks);
    if config.probe.enabled {
        let probe = HttpImageProbe::new(
            Duration::from_secs(config.probe.timeout_secs),
            config.probe.max_bytes,
        )?;
        builder = builder.image_probe(Box::new(probe));
    }
    let client = builder.build()?;

    let mut fields = FieldRegistry::new();
    let registrar: Option<&mut dyn FieldRegistrar> = if config.rest.expose_meta_field {
        Some(&mut fields)
    } else {
        None
    };
    register_meta_field(registrar, &store.content_types());

    Ok(AppState {
        config: Arc::new(config),
        client: Arc::new(client),
        fields: Arc::new(fields),
    })
}
