mod interest;
mod item;

pub use interest::{CategoryStats, UserInterest};
pub use item::{Item, ItemSummary};

/// Identifier of a catalog item
pub type ItemId = i64;

/// Identifier of a category row in `types`
pub type CategoryId = i64;

/// Identifier of a shop user
pub type UserId = i64;
