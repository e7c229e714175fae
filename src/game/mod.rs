//! Player-side rounds.
//!
//! A round tracks one attempt at a level: the player's selection or path,
//! the mistake and hint counters, and submission to the score engine.
//!
//! - [`KnapsackRound`] — Toggle items, over-capacity packs count as mistakes
//! - [`TourRound`] — Append cities, revisits are rejected as mistakes

mod knapsack;
mod tour;

use serde::Serialize;

use crate::scoring::ScoreReport;

pub use knapsack::{KnapsackRound, SelectionChange};
pub use tour::{TourRound, VisitOutcome};

/// A scored submission together with the player's answer and the
/// reference solution it was measured against.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission<R, U> {
    /// Score, rating and explanation for the attempt.
    pub report: ScoreReport,
    /// The solver's answer for the same level.
    pub reference: R,
    /// What the player submitted: packed items or the visiting order.
    pub user_solution: Vec<U>,
}
