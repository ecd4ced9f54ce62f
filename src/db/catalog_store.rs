use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::{
    error::{AppError, AppResult},
    models::{CategoryId, Item, ItemId, UserId, UserInterest},
};

/// Read-only access to the catalog, category and interest relations
///
/// Handlers and ranking code receive this as an injected trait object so they
/// can run against SQLite in production and against mocks in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All item ids, in a stable order that scans follow
    async fn list_item_ids(&self) -> AppResult<Vec<ItemId>>;

    /// Full item record with its category name resolved
    ///
    /// Fails with `AppError::NotFound` for an unknown id.
    async fn get_item(&self, id: ItemId) -> AppResult<Item>;

    /// Every interest row recorded for the user; empty for unknown users
    async fn get_user_interests(&self, user_id: UserId) -> AppResult<Vec<UserInterest>>;

    /// Display name of a category
    async fn get_category_name(&self, category_id: CategoryId) -> AppResult<String>;

    /// Every item's full projection, in `list_item_ids` order
    async fn list_items(&self) -> AppResult<Vec<Item>> {
        let ids = self.list_item_ids().await?;
        let mut items = Vec::with_capacity(ids.len());
        for id in ids {
            items.push(self.get_item(id).await?);
        }
        Ok(items)
    }
}

/// Row shape of the catalog/types join
#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    item_id: i64,
    item_name: String,
    item_type: i64,
    type_name: Option<String>,
    item_price: i64,
    item_count: i64,
    item_discount: i64,
    item_rating: f64,
}

impl TryFrom<ItemRow> for Item {
    type Error = AppError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        let category = row.type_name.ok_or_else(|| {
            AppError::Integrity(format!(
                "item {} references unknown category {}",
                row.item_id, row.item_type
            ))
        })?;

        Ok(Item {
            id: row.item_id,
            name: row.item_name,
            category,
            price: row.item_price,
            count: row.item_count,
            discount: row.item_discount,
            rating: row.item_rating,
        })
    }
}

const ITEM_SELECT: &str = r#"
    SELECT
        c.item_id, c.item_name, c.item_type, t.type_name,
        c.item_price, c.item_count, c.item_discount,
        CAST(c.item_rating AS REAL) AS item_rating
    FROM catalog c
    LEFT JOIN types t ON t.type_id = c.item_type
"#;

/// `CatalogStore` backed by the shop's SQLite database
#[derive(Clone)]
pub struct SqlCatalogStore {
    pool: SqlitePool,
}

impl SqlCatalogStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for SqlCatalogStore {
    async fn list_item_ids(&self) -> AppResult<Vec<ItemId>> {
        let ids = sqlx::query_scalar::<_, i64>("SELECT item_id FROM catalog ORDER BY item_id")
            .fetch_all(&self.pool)
            .await?;

        Ok(ids)
    }

    async fn get_item(&self, id: ItemId) -> AppResult<Item> {
        let query = format!("{ITEM_SELECT} WHERE c.item_id = ?");
        let row = sqlx::query_as::<_, ItemRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("item {}", id)))?;

        Item::try_from(row)
    }

    async fn get_user_interests(&self, user_id: UserId) -> AppResult<Vec<UserInterest>> {
        let interests = sqlx::query_as::<_, UserInterest>(
            r#"
            SELECT
                user_id, item_type,
                CAST(total_type_amount AS REAL) AS total_type_amount,
                CAST(average_type_rating AS REAL) AS average_type_rating,
                count_of_type_purchased
            FROM interests
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(interests)
    }

    async fn get_category_name(&self, category_id: CategoryId) -> AppResult<String> {
        sqlx::query_scalar::<_, String>("SELECT type_name FROM types WHERE type_id = ?")
            .bind(category_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("category {}", category_id)))
    }

    async fn list_items(&self) -> AppResult<Vec<Item>> {
        let query = format!("{ITEM_SELECT} ORDER BY c.item_id");
        sqlx::query_as::<_, ItemRow>(&query)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Item::try_from)
            .collect()
    }
}
