//! Handlers for item and collection metadata.

use crate::{errors::AppError, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use seometa::{
    constants::META_FIELD_NAME, ContentItem, ItemId, MetadataResult, MetadataTarget,
};
use serde::Serialize;
use tracing::info;

/// The response body for `/items/{id}`.
#[derive(Serialize, Debug)]
pub struct ItemResponse {
    #[serde(flatten)]
    pub item: ContentItem,
    pub link: String,
    /// Present only when the `meta` field is registered for the item's type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<MetadataResult>,
}

/// Returns a content item, with its resolved metadata attached under `meta`
/// when that field is registered for the item's type.
pub async fn get_item_handler(
    State(app_state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<Json<ItemResponse>, AppError> {
    info!("Received item request for id: {id}");
    let repository = app_state.client.repository();
    let item = repository.get_item(id)?;
    let link = repository.get_permalink(id)?;

    let meta = if app_state.fields.has_field(&item.type_id, META_FIELD_NAME) {
        Some(app_state.client.resolve_post_item(&item).await?)
    } else {
        None
    };

    Ok(Json(ItemResponse { item, link, meta }))
}

/// Returns the resolved metadata of a single item.
pub async fn item_meta_handler(
    State(app_state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<Json<MetadataResult>, AppError> {
    info!("Received metadata request for item: {id}");
    let result = app_state.client.resolve(&MetadataTarget::Post(id)).await?;
    Ok(Json(result))
}

/// Returns the resolved metadata of a content type's listing page.
pub async fn collection_meta_handler(
    State(app_state): State<AppState>,
    Path(type_id): Path<String>,
) -> Result<Json<MetadataResult>, AppError> {
    info!("Received metadata request for collection: {type_id}");
    let result = app_state
        .client
        .resolve(&MetadataTarget::Collection(type_id))
        .await?;
    Ok(Json(result))
}
