//! Score computation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Explanation, Rating, ScoringConfig};
use crate::error::GameError;

/// Which puzzle a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    /// 0/1 knapsack: higher value is better.
    Knapsack,
    /// Traveling salesman: shorter distance is better.
    Tour,
}

impl FromStr for GameKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "knapsack" => Ok(GameKind::Knapsack),
            "tour" | "tsp" => Ok(GameKind::Tour),
            _ => Err(GameError::UnknownGame(s.to_string())),
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameKind::Knapsack => f.write_str("knapsack"),
            GameKind::Tour => f.write_str("tour"),
        }
    }
}

/// The outcome of scoring one submitted solution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    /// Which puzzle was scored.
    pub game: GameKind,
    /// Final score after penalties, never negative.
    pub score: u32,
    /// Ratio of user outcome to reference outcome; 1.0 matches the reference.
    pub efficiency: f64,
    /// Mistakes charged against the score.
    pub mistakes: u32,
    /// Hints charged against the score.
    pub hints_used: u32,
    /// The player's total value (knapsack) or closed tour length (tour).
    pub user_value: f64,
    /// The reference solver's value or distance.
    pub reference_value: f64,
    /// Star band for [`ScoreReport::score`].
    pub rating: Rating,
    /// How the reference answer was computed.
    pub explanation: &'static Explanation,
}

impl ScoreReport {
    /// Efficiency as a percentage.
    pub fn efficiency_percent(&self) -> f64 {
        self.efficiency * 100.0
    }
}

/// Turns raw outcomes into scores under a [`ScoringConfig`].
///
/// # Examples
///
/// ```
/// use u_puzzle::scoring::{GameKind, ScoreEngine};
///
/// let engine = ScoreEngine::default();
/// let report = engine.score(GameKind::Knapsack, 360.0, 360.0, 2, 1);
/// assert_eq!(report.score, 875);
///
/// let tour = engine.score(GameKind::Tour, 200.0, 150.0, 0, 0);
/// assert_eq!(tour.score, 750);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    config: ScoringConfig,
}

impl ScoreEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Efficiency of a user outcome relative to the reference.
    ///
    /// Knapsack divides user value by optimal value; tour divides the
    /// reference distance by the user distance. A zero denominator yields
    /// zero efficiency.
    pub fn efficiency(kind: GameKind, user: f64, reference: f64) -> f64 {
        let (num, den) = match kind {
            GameKind::Knapsack => (user, reference),
            GameKind::Tour => (reference, user),
        };
        if den == 0.0 {
            return 0.0;
        }
        let ratio = num / den;
        if ratio.is_finite() {
            ratio
        } else {
            0.0
        }
    }

    /// Scores a submitted solution.
    pub fn score(
        &self,
        kind: GameKind,
        user: f64,
        reference: f64,
        hints_used: u32,
        mistakes: u32,
    ) -> ScoreReport {
        let efficiency = Self::efficiency(kind, user, reference);
        let base = (efficiency * f64::from(self.config.max_score)).round() as i64;
        let score = clamp_score(base - self.config.penalty(hints_used, mistakes));

        debug!(%kind, efficiency, base, hints_used, mistakes, score, "scored submission");

        ScoreReport {
            game: kind,
            score,
            efficiency,
            mistakes,
            hints_used,
            user_value: user,
            reference_value: reference,
            rating: Rating::from_score(score),
            explanation: Explanation::for_game(kind),
        }
    }

    /// Score shown while a round is still in progress: full marks minus
    /// penalties so far.
    pub fn preview(&self, hints_used: u32, mistakes: u32) -> u32 {
        clamp_score(i64::from(self.config.max_score) - self.config.penalty(hints_used, mistakes))
    }
}

fn clamp_score(raw: i64) -> u32 {
    u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
}

/// Scores with the default configuration.
pub fn score(
    kind: GameKind,
    user: f64,
    reference: f64,
    hints_used: u32,
    mistakes: u32,
) -> ScoreReport {
    ScoreEngine::default().score(kind, user, reference, hints_used, mistakes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_score() {
        let r = score(GameKind::Knapsack, 360.0, 360.0, 0, 0);
        assert_eq!(r.score, 1000);
        assert_eq!(r.rating, Rating::Perfect);
        assert!((r.efficiency - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_penalties() {
        let r = score(GameKind::Knapsack, 360.0, 360.0, 2, 1);
        assert_eq!(r.score, 875);
        assert_eq!(r.hints_used, 2);
        assert_eq!(r.mistakes, 1);
    }

    #[test]
    fn test_floor_at_zero() {
        let r = score(GameKind::Knapsack, 10.0, 360.0, 10, 10);
        assert_eq!(r.score, 0);
        assert_eq!(r.rating, Rating::KeepTrying);
    }

    #[test]
    fn test_knapsack_rounding() {
        // 240 / 360 = 0.6667 -> 667
        let r = score(GameKind::Knapsack, 240.0, 360.0, 0, 0);
        assert_eq!(r.score, 667);
        assert!((r.efficiency_percent() - 66.666_666).abs() < 1e-3);
    }

    #[test]
    fn test_tour_inverted() {
        let r = score(GameKind::Tour, 200.0, 150.0, 0, 1);
        assert_eq!(r.score, 725);
        assert_eq!(r.user_value, 200.0);
        assert_eq!(r.reference_value, 150.0);
    }

    #[test]
    fn test_tour_beating_reference_exceeds_max() {
        let r = score(GameKind::Tour, 100.0, 150.0, 0, 0);
        assert_eq!(r.score, 1500);
    }

    #[test]
    fn test_zero_denominators() {
        assert_eq!(ScoreEngine::efficiency(GameKind::Knapsack, 50.0, 0.0), 0.0);
        assert_eq!(ScoreEngine::efficiency(GameKind::Tour, 0.0, 150.0), 0.0);
        assert_eq!(score(GameKind::Tour, 0.0, 150.0, 0, 0).score, 0);
    }

    #[test]
    fn test_explanation_follows_kind() {
        let r = score(GameKind::Tour, 1.0, 1.0, 0, 0);
        assert_eq!(r.explanation.algorithm, "Nearest Neighbor Heuristic");
    }

    #[test]
    fn test_custom_config() {
        let engine = ScoreEngine::new(ScoringConfig::default().with_hint_penalty(100));
        assert_eq!(engine.score(GameKind::Knapsack, 1.0, 1.0, 2, 0).score, 800);
        assert_eq!(engine.preview(1, 1), 875);
    }

    #[test]
    fn test_preview() {
        let engine = ScoreEngine::default();
        assert_eq!(engine.preview(0, 0), 1000);
        assert_eq!(engine.preview(2, 1), 875);
        assert_eq!(engine.preview(30, 0), 0);
    }

    #[test]
    fn test_game_kind_parse() {
        assert_eq!("knapsack".parse::<GameKind>(), Ok(GameKind::Knapsack));
        assert_eq!("TSP".parse::<GameKind>(), Ok(GameKind::Tour));
        assert_eq!(GameKind::Tour.to_string(), "tour");
        assert!(matches!(
            "chess".parse::<GameKind>(),
            Err(GameError::UnknownGame(_))
        ));
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let r = score(GameKind::Knapsack, 300.0, 360.0, 1, 0);
        let json = serde_json::to_value(&r).expect("serializable");
        assert_eq!(json["hintsUsed"], 1);
        assert_eq!(json["game"], "knapsack");
        assert_eq!(json["rating"], "excellent");
        assert_eq!(json["explanation"]["algorithm"], "Dynamic Programming");
    }
}
