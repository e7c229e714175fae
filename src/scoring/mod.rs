//! Scoring of player solutions against the reference solvers.
//!
//! - [`ScoreEngine`] — Efficiency, penalties, and the final [`ScoreReport`]
//! - [`ScoringConfig`] — Point values, overridable from TOML
//! - [`Rating`] — Qualitative band for a final score
//! - [`Explanation`] — Static teaching text per [`GameKind`]

mod config;
mod engine;
mod explanation;
mod rating;

pub use config::ScoringConfig;
pub use engine::{score, GameKind, ScoreEngine, ScoreReport};
pub use explanation::Explanation;
pub use rating::Rating;
