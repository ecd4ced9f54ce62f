use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{Item, ItemId, ItemSummary, UserId},
    services::{catalog, recommendations},
};

use super::AppState;

fn summarize(items: Vec<Item>) -> Vec<ItemSummary> {
    items.into_iter().map(ItemSummary::from).collect()
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Lists every catalog item
pub async fn get_all_items(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<Vec<ItemSummary>>> {
    let items = catalog::list_summaries(state.store.as_ref()).await?;

    tracing::info!(request_id = %request_id, item_count = items.len(), "Listed catalog");

    Ok(Json(items))
}

/// Full detail of one item; 404 with a `false` body when unknown
pub async fn get_item(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(item_id): Path<ItemId>,
) -> AppResult<Json<Item>> {
    let item = catalog::item_detail(state.store.as_ref(), item_id)
        .await
        .inspect_err(|e| {
            tracing::info!(request_id = %request_id, item_id, error = %e, "Item lookup failed")
        })?;

    Ok(Json(item))
}

/// Top-rated items across the catalog
pub async fn recommend_popular(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<Vec<ItemSummary>>> {
    let items = recommendations::popular_items(state.store.as_ref()).await?;

    tracing::info!(request_id = %request_id, returned = items.len(), "Served popular items");

    Ok(Json(summarize(items)))
}

/// Recommendations for one user, falling back to popular items
pub async fn recommend_for_user(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(user_id): Path<UserId>,
) -> AppResult<Json<Vec<ItemSummary>>> {
    let items = recommendations::recommend_with_fallback(state.store.as_ref(), user_id).await?;

    tracing::info!(
        request_id = %request_id,
        user_id,
        returned = items.len(),
        "Served user recommendations"
    );

    Ok(Json(summarize(items)))
}
