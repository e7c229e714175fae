//! Exact 0/1 knapsack by dynamic programming.
//!
//! - [`solve_knapsack`] — Reference optimum and one optimal subset, O(n·C)
//! - [`DpTable`] — The flat `(n+1)×(C+1)` value table and its backtrack
//! - [`ratio_hint`] — Greedy value-density suggestion for players

mod hint;
mod solver;
mod table;

pub use hint::ratio_hint;
pub use solver::{solve_knapsack, KnapsackSolution};
pub use table::{DpTable, MAX_TABLE_CELLS};
