//! # REST Registration Tests

use seometa::constants::META_FIELD_NAME;
use seometa::providers::ContentRepository;
use seometa::rest::{register_meta_field, FieldRegistrar, FieldRegistry};
use seometa_test_utils::sample_store;

#[test]
fn test_meta_field_registered_for_every_type() {
    let store = sample_store();
    let mut registry = FieldRegistry::new();

    let count = register_meta_field(
        Some(&mut registry as &mut dyn FieldRegistrar),
        &store.content_types(),
    );

    assert_eq!(count, 3);
    for type_id in ["post", "page", "event"] {
        assert!(registry.has_field(type_id, META_FIELD_NAME));
    }
    assert_eq!(registry.fields_for("post"), vec!["meta".to_string()]);
    assert!(!registry.has_field("attachment", META_FIELD_NAME));
}

#[test]
fn test_registration_without_registrar_is_a_noop() {
    let store = sample_store();
    assert_eq!(register_meta_field(None, &store.content_types()), 0);
}
