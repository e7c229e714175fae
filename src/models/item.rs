//! Knapsack item type.

use serde::{Deserialize, Serialize};

/// A treasure that can be packed into the knapsack.
///
/// Value and weight are signed so that malformed input coming from a
/// foreign caller survives deserialization and is rejected by the solver
/// instead of wrapping around.
///
/// # Examples
///
/// ```
/// use u_puzzle::models::Item;
///
/// let ring = Item::new("1", "Ruby Ring", 100, 1);
/// assert_eq!(ring.id(), "1");
/// assert_eq!(ring.value(), 100);
/// assert_eq!(ring.weight(), 1);
/// assert!((ring.ratio() - 100.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    id: String,
    name: String,
    value: i64,
    weight: i64,
}

impl Item {
    /// Creates a new item.
    pub fn new(id: impl Into<String>, name: impl Into<String>, value: i64, weight: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value,
            weight,
        }
    }

    /// Unique identifier within a level.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value gained by packing this item.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Weight consumed by packing this item.
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Value per unit weight.
    ///
    /// Weightless items have an infinite ratio.
    pub fn ratio(&self) -> f64 {
        if self.weight == 0 {
            f64::INFINITY
        } else {
            self.value as f64 / self.weight as f64
        }
    }
}

/// Total weight of a set of items, saturating instead of overflowing.
pub fn total_weight<'a>(items: impl IntoIterator<Item = &'a Item>) -> i64 {
    items
        .into_iter()
        .fold(0i64, |acc, item| acc.saturating_add(item.weight()))
}

/// Total value of a set of items, saturating instead of overflowing.
pub fn total_value<'a>(items: impl IntoIterator<Item = &'a Item>) -> i64 {
    items
        .into_iter()
        .fold(0i64, |acc, item| acc.saturating_add(item.value()))
}
