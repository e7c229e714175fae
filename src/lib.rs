//! # u-puzzle
//!
//! Scoring engine for two classic optimization puzzles: 0/1 knapsack and
//! the traveling salesman. A player's manual solution is measured against
//! a reference computed here and turned into a 1000-point score.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Item, City, problem instances)
//! - [`distance`] — Euclidean distance matrix
//! - [`knapsack`] — Exact knapsack by dynamic programming
//! - [`tour`] — Nearest-neighbor tour heuristic and path lengths
//! - [`scoring`] — Efficiency, penalties, ratings, and explanations
//! - [`levels`] — Bundled difficulty tiers
//! - [`game`] — Player rounds with mistake and hint tracking
//!
//! ## Example
//!
//! ```
//! use u_puzzle::knapsack::solve_knapsack;
//! use u_puzzle::levels::{knapsack_level, Difficulty};
//! use u_puzzle::scoring::{score, GameKind};
//!
//! let level = knapsack_level(Difficulty::Easy);
//! let reference = solve_knapsack(level.items(), level.capacity()).unwrap();
//! let report = score(GameKind::Knapsack, 300.0, reference.optimal_value as f64, 1, 0);
//! assert_eq!(report.score, 833 - 50);
//! ```

pub mod distance;
pub mod error;
pub mod game;
pub mod knapsack;
pub mod levels;
pub mod models;
pub mod scoring;
pub mod tour;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{GameError, Result};
