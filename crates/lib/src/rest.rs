//! # REST Field Registration
//!
//! Registers the `meta` field on every content type exposed by the host's API
//! layer. Hosts without a field-registration facility pass `None`, which makes
//! registration a no-op.

use crate::constants::META_FIELD_NAME;
use crate::types::CollectionDescriptor;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info};

/// A host facility that attaches extra fields to API objects.
pub trait FieldRegistrar {
    fn register_field(&mut self, object_type: &str, field_name: &str);
}

/// Registers the `meta` field for each of `content_types`.
///
/// Returns the number of registrations made.
pub fn register_meta_field(
    registrar: Option<&mut dyn FieldRegistrar>,
    content_types: &[CollectionDescriptor],
) -> usize {
    let Some(registrar) = registrar else {
        debug!("No field registrar available; skipping '{META_FIELD_NAME}' registration");
        return 0;
    };

    for descriptor in content_types {
        registrar.register_field(&descriptor.type_id, META_FIELD_NAME);
    }
    info!(
        types = content_types.len(),
        "Registered '{META_FIELD_NAME}' REST field"
    );
    content_types.len()
}

/// A simple in-process field registry.
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    fields: HashMap<String, BTreeSet<String>>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_field(&self, object_type: &str, field_name: &str) -> bool {
        self.fields
            .get(object_type)
            .is_some_and(|fields| fields.contains(field_name))
    }

    /// Fields registered for `object_type`, in name order.
    pub fn fields_for(&self, object_type: &str) -> Vec<String> {
        self.fields
            .get(object_type)
            .map(|fields| fields.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl FieldRegistrar for FieldRegistry {
    fn register_field(&mut self, object_type: &str, field_name: &str) {
        self.fields
            .entry(object_type.to_string())
            .or_default()
            .insert(field_name.to_string());
    }
}
