//! Domain model types for the puzzles.
//!
//! Items and cities are immutable once a level defines them. Instances
//! bundle them with the remaining puzzle parameters and know how to
//! validate themselves before a solver touches them.

mod city;
mod instance;
mod item;

pub use city::City;
pub use instance::{KnapsackInstance, TourInstance};
pub(crate) use instance::{validate_knapsack, validate_tour};
pub use item::{total_value, total_weight, Item};
