//! In-memory SQLite fixtures shared by the crate's unit tests.

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

const SCHEMA: &str = include_str!("../../tests/fixtures/shop_schema.sql");

/// Single-connection in-memory database with the shop schema applied
pub async fn memory_pool() -> SqlitePool {
    // Each SQLite memory connection is its own database, so keep exactly one alive.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::raw_sql(SCHEMA)
        .execute(&pool)
        .await
        .expect("Failed to apply schema");

    pool
}

pub async fn insert_type(pool: &SqlitePool, type_id: i64, type_name: &str) {
    sqlx::query("INSERT INTO types (type_id, type_name) VALUES (?, ?)")
        .bind(type_id)
        .bind(type_name)
        .execute(pool)
        .await
        .expect("Failed to insert type");
}

#[allow(clippy::too_many_arguments)]
pub async fn insert_item(
    pool: &SqlitePool,
    item_id: i64,
    name: &str,
    type_id: i64,
    price: i64,
    count: i64,
    discount: i64,
    rating: f64,
) {
    sqlx::query(
        "INSERT INTO catalog (item_id, item_name, item_type, item_price, item_count, item_discount, item_rating) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(item_id)
    .bind(name)
    .bind(type_id)
    .bind(price)
    .bind(count)
    .bind(discount)
    .bind(rating)
    .execute(pool)
    .await
    .expect("Failed to insert item");
}

pub async fn insert_interest(
    pool: &SqlitePool,
    user_id: i64,
    type_id: i64,
    total_amount: f64,
    average_rating: f64,
    purchase_count: i64,
) {
    sqlx::query(
        "INSERT INTO interests (user_id, item_type, total_type_amount, average_type_rating, count_of_type_purchased) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(user_id)
    .bind(type_id)
    .bind(total_amount)
    .bind(average_rating)
    .bind(purchase_count)
    .execute(pool)
    .await
    .expect("Failed to insert interest");
}
