//! Interactive tour round.

use serde::Serialize;
use tracing::debug;

use super::Submission;
use crate::error::{GameError, Result};
use crate::models::{City, TourInstance};
use crate::scoring::{GameKind, ScoreEngine};
use crate::tour::{closed_length, nearest_hint, open_length, TourSolution};

/// What a [`TourRound::visit`] did to the path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VisitOutcome {
    /// The city was appended.
    Extended {
        /// Distance from the previous city, zero for the first.
        leg: f64,
    },
    /// The city was already on the path. The path is unchanged and a
    /// mistake is counted.
    Revisit,
}

/// A player's tour attempt on one level.
///
/// # Examples
///
/// ```
/// use u_puzzle::game::{TourRound, VisitOutcome};
/// use u_puzzle::levels::{tour_level, Difficulty};
///
/// let mut round = TourRound::new(tour_level(Difficulty::Easy).clone());
/// round.visit("1").unwrap();
/// assert_eq!(round.visit("1").unwrap(), VisitOutcome::Revisit);
/// for id in ["4", "3", "2"] {
///     round.visit(id).unwrap();
/// }
/// let result = round.submit().unwrap();
/// assert_eq!(result.report.score, 1000 - 25);
/// ```
#[derive(Debug, Clone)]
pub struct TourRound {
    instance: TourInstance,
    engine: ScoreEngine,
    path: Vec<City>,
    mistakes: u32,
    hints_used: u32,
}

impl TourRound {
    /// Starts a round with the default scoring.
    pub fn new(instance: TourInstance) -> Self {
        Self::with_engine(instance, ScoreEngine::default())
    }

    /// Starts a round scored by the given engine.
    pub fn with_engine(instance: TourInstance, engine: ScoreEngine) -> Self {
        Self {
            instance,
            engine,
            path: Vec::new(),
            mistakes: 0,
            hints_used: 0,
        }
    }

    /// The level being played.
    pub fn instance(&self) -> &TourInstance {
        &self.instance
    }

    /// Appends a city to the path, rejecting revisits.
    pub fn visit(&mut self, city_id: &str) -> Result<VisitOutcome> {
        let city = self
            .instance
            .city(city_id)
            .ok_or_else(|| GameError::UnknownCity(city_id.to_string()))?;

        if self.path.iter().any(|c| c.id() == city_id) {
            self.mistakes += 1;
            debug!(city = city_id, mistakes = self.mistakes, "rejected revisit");
            return Ok(VisitOutcome::Revisit);
        }

        let leg = self.path.last().map_or(0.0, |last| last.distance_to(city));
        self.path.push(city.clone());
        Ok(VisitOutcome::Extended { leg })
    }

    /// Cities visited so far, in order.
    pub fn path(&self) -> &[City] {
        &self.path
    }

    /// Distance travelled so far, without returning to the start.
    pub fn open_distance(&self) -> f64 {
        open_length(&self.path)
    }

    /// Distance of the path closed back to its first city.
    pub fn closed_distance(&self) -> f64 {
        closed_length(&self.path)
    }

    /// Returns `true` once every city is on the path.
    pub fn is_complete(&self) -> bool {
        self.path.len() == self.instance.cities().len()
    }

    /// Rejected revisits so far.
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    /// Hints requested so far.
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Uses a hint: the nearest unvisited city from the end of the path.
    ///
    /// Returns `None` before the first city is chosen, and once the path is
    /// complete. The hint is counted either way.
    pub fn hint(&mut self) -> Option<&City> {
        self.hints_used += 1;
        nearest_hint(self.instance.cities(), &self.path)
    }

    /// Running score: full marks minus penalties so far.
    pub fn preview_score(&self) -> u32 {
        self.engine.preview(self.hints_used, self.mistakes)
    }

    /// Returns `true` once the path can be scored, i.e. it is complete.
    pub fn can_submit(&self) -> bool {
        self.is_complete()
    }

    /// Clears the path and both counters.
    pub fn reset(&mut self) {
        self.path.clear();
        self.mistakes = 0;
        self.hints_used = 0;
    }

    /// Scores the closed path against the nearest-neighbor reference tour.
    pub fn submit(&self) -> Result<Submission<TourSolution, City>> {
        if !self.can_submit() {
            return Err(GameError::NotReady(format!(
                "visited {} of {} cities",
                self.path.len(),
                self.instance.cities().len()
            )));
        }
        let reference = self.instance.solve()?;
        let report = self.engine.score(
            GameKind::Tour,
            self.closed_distance(),
            reference.distance,
            self.hints_used,
            self.mistakes,
        );
        Ok(Submission {
            report,
            reference,
            user_solution: self.path.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::{tour_level, Difficulty};

    fn easy_round() -> TourRound {
        TourRound::new(tour_level(Difficulty::Easy).clone())
    }

    #[test]
    fn test_first_visit_has_no_leg() {
        let mut round = easy_round();
        assert_eq!(
            round.visit("1").expect("known"),
            VisitOutcome::Extended { leg: 0.0 }
        );
        assert_eq!(round.open_distance(), 0.0);
        assert_eq!(round.closed_distance(), 0.0);
    }

    #[test]
    fn test_leg_distance() {
        let mut round = easy_round();
        round.visit("1").expect("known");
        match round.visit("4").expect("known") {
            VisitOutcome::Extended { leg } => assert!((leg - 800f64.sqrt()).abs() < 1e-10),
            other => panic!("unexpected {other:?}"),
        }
        assert!((round.closed_distance() - 2.0 * 800f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_revisit_rejected() {
        let mut round = easy_round();
        round.visit("1").expect("known");
        round.visit("2").expect("known");
        assert_eq!(round.visit("1").expect("known"), VisitOutcome::Revisit);
        assert_eq!(round.path().len(), 2);
        assert_eq!(round.mistakes(), 1);
    }

    #[test]
    fn test_unknown_city() {
        let mut round = easy_round();
        assert_eq!(round.visit("x"), Err(GameError::UnknownCity("x".into())));
    }

    #[test]
    fn test_hint() {
        let mut round = easy_round();
        assert!(round.hint().is_none());
        round.visit("1").expect("known");
        assert_eq!(round.hint().map(City::name), Some("Westport"));
        assert_eq!(round.hints_used(), 2);
        assert_eq!(round.preview_score(), 900);
    }

    #[test]
    fn test_incomplete_submit_rejected() {
        let mut round = easy_round();
        round.visit("1").expect("known");
        assert!(!round.can_submit());
        assert_eq!(
            round.submit().unwrap_err(),
            GameError::NotReady("visited 1 of 4 cities".into())
        );
    }

    #[test]
    fn test_submit_worse_tour() {
        let mut round = easy_round();
        // Startholm, Midgarde, Westport, Nordheim crosses itself.
        for id in ["1", "2", "4", "3"] {
            round.visit(id).expect("known");
        }
        let result = round.submit().expect("complete");
        assert!(result.report.user_value > result.reference.distance);
        assert!(result.report.score < 1000);
        assert!((result.report.efficiency
            - result.reference.distance / round.closed_distance())
        .abs()
            < 1e-12);
        let visited: Vec<&str> = result.user_solution.iter().map(City::id).collect();
        assert_eq!(visited, vec!["1", "2", "4", "3"]);
    }

    #[test]
    fn test_reset() {
        let mut round = easy_round();
        round.visit("1").expect("known");
        round.visit("1").expect("known");
        round.reset();
        assert!(round.path().is_empty());
        assert_eq!(round.mistakes(), 0);
    }
}
