use super::{handlers, state::AppState};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/types", get(handlers::list_types_handler))
        .route("/items/{id}", get(handlers::get_item_handler))
        .route("/items/{id}/meta", get(handlers::item_meta_handler))
        .route(
            "/collections/{type_id}/meta",
            get(handlers::collection_meta_handler),
        )
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
