use std::sync::Arc;

use sqlx::SqlitePool;

use crate::db::{CatalogStore, SqlCatalogStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// State backed by the SQLite catalog behind `pool`
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self::new(Arc::new(SqlCatalogStore::new(pool)))
    }
}
