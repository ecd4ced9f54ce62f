use std::cmp::Ordering;

use super::{CategoryId, UserId};

/// Aggregate purchase statistics of one user in one category
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UserInterest {
    pub user_id: UserId,
    #[sqlx(rename = "item_type")]
    pub category_id: CategoryId,
    #[sqlx(rename = "total_type_amount")]
    pub total_amount: f64,
    #[sqlx(rename = "average_type_rating")]
    pub average_rating: f64,
    #[sqlx(rename = "count_of_type_purchased")]
    pub purchase_count: i64,
}

impl UserInterest {
    /// The ranking statistics of this row, without the keys
    pub fn stats(&self) -> CategoryStats {
        CategoryStats {
            total_amount: self.total_amount,
            average_rating: self.average_rating,
            purchase_count: self.purchase_count,
        }
    }
}

/// Category-level ranking key: amount spent, then average rating, then count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryStats {
    pub total_amount: f64,
    pub average_rating: f64,
    pub purchase_count: i64,
}

impl CategoryStats {
    /// Lexicographic comparison over (amount, rating, count).
    ///
    /// Amounts and ratings compare with `f64::total_cmp`, so the order is total
    /// even if the store holds a NaN.
    pub fn cmp_key(&self, other: &Self) -> Ordering {
        self.total_amount
            .total_cmp(&other.total_amount)
            .then_with(|| self.average_rating.total_cmp(&other.average_rating))
            .then_with(|| self.purchase_count.cmp(&other.purchase_count))
    }
}
