use anyhow::Context;
use tracing_subscriber::EnvFilter;

use catalog_recommender::{
    api::{create_router, AppState},
    config::Config,
    db,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();

    let pool = db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to open catalog database")?;

    let app = create_router(AppState::from_pool(pool));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Installs the global subscriber; `RUST_LOG` overrides the default filter
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("catalog_recommender=info,tower_http=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
