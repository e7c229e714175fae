//! Exact 0/1 knapsack solver.
//!
//! # Complexity
//!
//! O(n·C) time and space, where n = number of items and C = capacity.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::DpTable;
use crate::error::{GameError, Result};
use crate::models::{total_weight, validate_knapsack, Item, KnapsackInstance};

/// The reference answer for a knapsack instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnapsackSolution {
    /// Maximum achievable total value.
    pub optimal_value: i64,
    /// One subset achieving it, in input order.
    pub items: Vec<Item>,
}

impl KnapsackSolution {
    /// Total weight of the chosen subset.
    pub fn total_weight(&self) -> i64 {
        total_weight(&self.items)
    }
}

/// Solves a 0/1 knapsack instance exactly.
///
/// Rejects negative capacity, negative weights or values, and duplicate
/// item ids with [`GameError::InvalidInstance`].
///
/// # Examples
///
/// ```
/// use u_puzzle::models::Item;
/// use u_puzzle::knapsack::solve_knapsack;
///
/// let items = vec![
///     Item::new("1", "Ruby Ring", 100, 1),
///     Item::new("2", "Gold Coin", 60, 2),
///     Item::new("3", "Silver Chalice", 120, 4),
/// ];
/// let sol = solve_knapsack(&items, 5).unwrap();
/// assert_eq!(sol.optimal_value, 220);
/// assert!(sol.total_weight() <= 5);
/// ```
pub fn solve_knapsack(items: &[Item], capacity: i64) -> Result<KnapsackSolution> {
    validate_knapsack(items, capacity)?;
    let capacity = usize::try_from(capacity)
        .map_err(|_| GameError::InvalidInstance(format!("capacity {capacity} out of range")))?;

    let table = DpTable::build(items, capacity)?;
    let chosen: Vec<Item> = table
        .backtrack()
        .into_iter()
        .map(|i| items[i].clone())
        .collect();

    debug!(
        items = items.len(),
        capacity,
        optimal_value = table.optimum(),
        chosen = chosen.len(),
        "solved knapsack"
    );

    Ok(KnapsackSolution {
        optimal_value: table.optimum(),
        items: chosen,
    })
}

impl KnapsackInstance {
    /// Solves this instance; see [`solve_knapsack`].
    pub fn solve(&self) -> Result<KnapsackSolution> {
        solve_knapsack(self.items(), self.capacity())
    }
}
