use serde::Serialize;

use super::ItemId;

/// Full catalog item with its category resolved to a display name
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Category display name, joined from `types`
    #[serde(rename = "type")]
    pub category: String,
    /// Price in the smallest currency unit
    pub price: i64,
    /// Units in stock
    pub count: i64,
    /// Discount in percent
    pub discount: i64,
    pub rating: f64,
}

/// Reduced projection shown in listings and recommendation feeds
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ItemSummary {
    pub id: ItemId,
    pub name: String,
    pub price: i64,
    pub discount: i64,
}

impl From<Item> for ItemSummary {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            discount: item.discount,
        }
    }
}
