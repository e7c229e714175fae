//! Approximate Euclidean TSP tours.
//!
//! - [`solve_tour`] — Nearest-neighbor reference tour, O(n²)
//! - [`closed_length`] / [`open_length`] — Length of a player's path
//! - [`nearest_hint`] — Nearest unvisited city from the path's tail

mod hint;
mod nearest_neighbor;
mod path;

pub use hint::nearest_hint;
pub use nearest_neighbor::{solve_tour, TourSolution};
pub use path::{closed_length, open_length};
