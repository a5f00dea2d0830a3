use crate::state::AppState;
use axum::{extract::State, Json};
use seometa::CollectionDescriptor;

/// The root handler.
pub async fn root() -> &'static str {
    "seometa server is running."
}

/// The health check handler.
pub async fn health_check() -> &'static str {
    "OK"
}

/// Lists the content types known to the site.
pub async fn list_types_handler(State(app_state): State<AppState>) -> Json<Vec<CollectionDescriptor>> {
    Json(app_state.client.repository().content_types())
}
