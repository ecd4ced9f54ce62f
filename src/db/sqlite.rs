use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Creates a read-only SQLite connection pool over the shop database
///
/// The service never writes, so connections are opened read-only and the
/// database file must already exist.
pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(database_url = %database_url, max_connections, "Connected to catalog store");

    Ok(pool)
}
