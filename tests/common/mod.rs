use axum_test::TestServer;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use catalog_recommender::api::{create_router, AppState};

const SCHEMA: &str = include_str!("../fixtures/shop_schema.sql");

/// Shop database held in a single in-memory SQLite connection
pub struct Shop {
    pub pool: SqlitePool,
}

impl Shop {
    pub async fn new() -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::raw_sql(SCHEMA).execute(&pool).await.unwrap();

        Self { pool }
    }

    pub async fn category(&self, type_id: i64, name: &str) -> &Self {
        sqlx::query("INSERT INTO types (type_id, type_name) VALUES (?, ?)")
            .bind(type_id)
            .bind(name)
            .execute(&self.pool)
            .await
            .unwrap();
        self
    }

    /// Inserts an item priced `100 * id` with 5 in stock and no discount
    pub async fn item(&self, item_id: i64, name: &str, type_id: i64, rating: f64) -> &Self {
        sqlx::query(
            "INSERT INTO catalog (item_id, item_name, item_type, item_price, item_count, item_discount, item_rating) \
             VALUES (?, ?, ?, ?, 5, 0, ?)",
        )
        .bind(item_id)
        .bind(name)
        .bind(type_id)
        .bind(100 * item_id)
        .bind(rating)
        .execute(&self.pool)
        .await
        .unwrap();
        self
    }

    pub async fn interest(
        &self,
        user_id: i64,
        type_id: i64,
        total_amount: f64,
        average_rating: f64,
        purchase_count: i64,
    ) -> &Self {
        sqlx::query(
            "INSERT INTO interests (user_id, item_type, total_type_amount, average_type_rating, count_of_type_purchased) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(type_id)
        .bind(total_amount)
        .bind(average_rating)
        .bind(purchase_count)
        .execute(&self.pool)
        .await
        .unwrap();
        self
    }

    pub fn server(&self) -> TestServer {
        let app = create_router(AppState::from_pool(self.pool.clone()));
        TestServer::new(app).unwrap()
    }
}
