//! Dynamic-programming table for 0/1 knapsack.

use crate::error::{GameError, Result};
use crate::models::Item;

/// Upper bound on table cells, keeping memory use bounded for hostile input.
pub const MAX_TABLE_CELLS: usize = 1 << 24;

/// The `(n+1) × (C+1)` table of optimal values, stored row-major.
///
/// Cell `(i, w)` holds the best value achievable with the first `i` items
/// under weight limit `w`.
///
/// # Examples
///
/// ```
/// use u_puzzle::models::Item;
/// use u_puzzle::knapsack::DpTable;
///
/// let items = vec![Item::new("1", "a", 10, 1), Item::new("2", "b", 15, 2)];
/// let table = DpTable::build(&items, 2).unwrap();
/// assert_eq!(table.get(2, 2), 15);
/// assert_eq!(table.get(1, 2), 10);
/// assert_eq!(table.optimum(), 15);
/// assert_eq!(table.backtrack(), vec![1]);
/// ```
#[derive(Debug, Clone)]
pub struct DpTable {
    cells: Vec<i64>,
    weights: Vec<usize>,
    rows: usize,
    cols: usize,
}

impl DpTable {
    /// Fills the table for the given items and capacity.
    ///
    /// Items must already be validated as non-negative.
    pub fn build(items: &[Item], capacity: usize) -> Result<Self> {
        let rows = items.len() + 1;
        let cols = capacity
            .checked_add(1)
            .ok_or_else(|| GameError::InvalidInstance("capacity too large".into()))?;
        let size = rows
            .checked_mul(cols)
            .filter(|&s| s <= MAX_TABLE_CELLS)
            .ok_or_else(|| {
                GameError::InvalidInstance(format!(
                    "table of {rows}x{cols} cells exceeds {MAX_TABLE_CELLS}"
                ))
            })?;

        let weights: Vec<usize> = items
            .iter()
            .map(|item| usize::try_from(item.weight()).unwrap_or(usize::MAX))
            .collect();
        let mut table = Self {
            cells: vec![0; size],
            weights,
            rows,
            cols,
        };

        for (idx, item) in items.iter().enumerate() {
            let i = idx + 1;
            let weight = table.weights[idx];
            for w in 0..cols {
                let skip = table.get(i - 1, w);
                let best = if weight > w {
                    skip
                } else {
                    skip.max(table.get(i - 1, w - weight).saturating_add(item.value()))
                };
                table.cells[i * cols + w] = best;
            }
        }

        Ok(table)
    }

    /// Optimal value using the first `i` items under weight limit `w`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, w)` lies outside the table.
    pub fn get(&self, i: usize, w: usize) -> i64 {
        self.cells[i * self.cols + w]
    }

    /// Number of item rows, including the empty-prefix row.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of weight columns (`capacity + 1`).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The optimal value for the full instance.
    pub fn optimum(&self) -> i64 {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// Indices of one optimal subset, in ascending order.
    ///
    /// Walks from the last item back to the first; an item is taken when
    /// its row differs from the row above at the current weight. A later
    /// item is only taken when it strictly improves on the rows above, so
    /// equally valuable alternatives resolve to the earlier items.
    /// Uses the weights captured by [`DpTable::build`], so the result
    /// always indexes the slice the table was built from.
    pub fn backtrack(&self) -> Vec<usize> {
        let mut chosen = Vec::new();
        let mut w = self.cols - 1;
        for i in (1..self.rows).rev() {
            if self.get(i, w) != self.get(i - 1, w) {
                chosen.push(i - 1);
                // A differing row means the item fit, so weight <= w.
                w -= self.weights[i - 1];
            }
        }
        chosen.reverse();
        chosen
    }
}
