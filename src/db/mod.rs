pub mod catalog_store;
pub mod sqlite;

pub use catalog_store::{CatalogStore, SqlCatalogStore};
pub use sqlite::create_pool;

#[cfg(test)]
pub use catalog_store::MockCatalogStore;

#[cfg(test)]
pub(crate) mod testing;
