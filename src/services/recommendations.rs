use std::collections::HashMap;

use crate::{
    db::CatalogStore,
    error::{AppError, AppResult},
    models::{CategoryStats, Item, UserId},
};

/// Number of items kept by the popularity ranking
pub const POPULAR_LIMIT: usize = 20;

/// Orders items by rating, highest first, and keeps the top `POPULAR_LIMIT`.
///
/// The sort is stable: items with equal ratings keep their scan order.
pub fn rank_by_popularity(mut items: Vec<Item>) -> Vec<Item> {
    items.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    items.truncate(POPULAR_LIMIT);
    items
}

/// Keeps the items whose category name appears in `profile` and orders them by
/// that category's statistics, highest first. The result is not truncated.
///
/// Items are matched on the category display name, not its id.
pub fn rank_by_interests(items: Vec<Item>, profile: &HashMap<String, CategoryStats>) -> Vec<Item> {
    let mut candidates: Vec<(CategoryStats, Item)> = items
        .into_iter()
        .filter_map(|item| profile.get(&item.category).map(|stats| (*stats, item)))
        .collect();

    candidates.sort_by(|(a, _), (b, _)| b.cmp_key(a));

    candidates.into_iter().map(|(_, item)| item).collect()
}

/// Builds the user's category-name → statistics map.
///
/// When two interest rows resolve to the same name, the later row wins.
pub async fn interest_profile(
    store: &dyn CatalogStore,
    user_id: UserId,
) -> AppResult<HashMap<String, CategoryStats>> {
    let interests = store.get_user_interests(user_id).await?;

    let mut profile = HashMap::with_capacity(interests.len());
    for interest in interests {
        let name = store
            .get_category_name(interest.category_id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(what) => AppError::Integrity(format!(
                    "interest of user {} references missing {}",
                    user_id, what
                )),
                other => other,
            })?;
        profile.insert(name, interest.stats());
    }

    Ok(profile)
}

/// Global popularity ranking over the whole catalog
pub async fn popular_items(store: &dyn CatalogStore) -> AppResult<Vec<Item>> {
    let items = store.list_items().await?;
    let catalog_size = items.len();
    let ranked = rank_by_popularity(items);

    tracing::debug!(catalog_size, returned = ranked.len(), "Ranked items by popularity");

    Ok(ranked)
}

/// Personalized ranking; empty when the user has no recorded interests or none
/// of the catalog's categories match them.
pub async fn recommend_for_user(store: &dyn CatalogStore, user_id: UserId) -> AppResult<Vec<Item>> {
    let profile = interest_profile(store, user_id).await?;
    if profile.is_empty() {
        return Ok(Vec::new());
    }

    let items = store.list_items().await?;
    let ranked = rank_by_interests(items, &profile);

    tracing::debug!(
        user_id,
        categories = profile.len(),
        returned = ranked.len(),
        "Ranked items by user interests"
    );

    Ok(ranked)
}

/// Personalized ranking, falling back to the popularity ranking when it is empty
pub async fn recommend_with_fallback(
    store: &dyn CatalogStore,
    user_id: UserId,
) -> AppResult<Vec<Item>> {
    let personalized = recommend_for_user(store, user_id).await?;
    if !personalized.is_empty() {
        return Ok(personalized);
    }

    tracing::info!(user_id, "No personalized recommendations, using popular items");
    popular_items(store).await
}
