//! # Request Handlers
//!
//! General service endpoints live in `general`; the metadata endpoints in
//! `metadata`.

pub mod general;
pub mod metadata;

pub use general::{health_check, list_types_handler, root};
pub use metadata::{collection_meta_handler, get_item_handler, item_meta_handler};
