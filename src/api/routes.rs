use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;
use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Catalog
        .route("/items/get/all", get(handlers::get_all_items))
        // Recommendations
        .route("/items/get/recommend/all", get(handlers::recommend_popular))
        .route("/items/get/recommend/:user_id", get(handlers::recommend_for_user))
        // Single item
        .route("/items/get/:item_id", get(handlers::get_item))
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}
