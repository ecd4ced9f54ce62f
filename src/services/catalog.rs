use crate::{
    db::CatalogStore,
    error::AppResult,
    models::{Item, ItemId, ItemSummary},
};

/// Reduced projection of every catalog item, in scan order
pub async fn list_summaries(store: &dyn CatalogStore) -> AppResult<Vec<ItemSummary>> {
    let items = store.list_items().await?;
    Ok(items.into_iter().map(ItemSummary::from).collect())
}

/// Full detail of one item; `AppError::NotFound` if it is not in the catalog
pub async fn item_detail(store: &dyn CatalogStore, id: ItemId) -> AppResult<Item> {
    store.get_item(id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MockCatalogStore;
    use crate::error::AppError;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_list_summaries_keeps_scan_order() {
        let mut store = MockCatalogStore::new();
        store.expect_list_items().returning(|| {
            Ok(vec![
                Item {
                    id: 3,
                    name: "Kite".to_string(),
                    category: "Toys".to_string(),
                    price: 2500,
                    count: 1,
                    discount: 15,
                    rating: 4.9,
                },
                Item {
                    id: 1,
                    name: "Dune".to_string(),
                    category: "Books".to_string(),
                    price: 1299,
                    count: 4,
                    discount: 0,
                    rating: 4.5,
                },
            ])
        });

        let summaries = list_summaries(&store).await.unwrap();
        assert_eq!(
            summaries,
            vec![
                ItemSummary { id: 3, name: "Kite".to_string(), price: 2500, discount: 15 },
                ItemSummary { id: 1, name: "Dune".to_string(), price: 1299, discount: 0 },
            ]
        );
    }

    #[tokio::test]
    async fn test_item_detail_not_found() {
        let mut store = MockCatalogStore::new();
        store
            .expect_get_item()
            .with(eq(9999_i64))
            .returning(|id| Err(AppError::NotFound(format!("item {}", id))));

        assert!(matches!(
            item_detail(&store, 9999).await,
            Err(AppError::NotFound(_))
        ));
    }
}
