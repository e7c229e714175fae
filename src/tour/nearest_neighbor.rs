//! Nearest-neighbor tour heuristic.
//!
//! Starts at the first city and always travels to the nearest unvisited
//! city, then closes the loop back to the start.
//!
//! # Complexity
//!
//! O(n²) time, O(n) extra space beyond the distance matrix.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for TSP and gives no
//! optimality guarantee. Player scores are measured against this baseline,
//! so it must not be swapped for an exact or improved method.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::{validate_tour, City, TourInstance};

/// The reference tour for a city set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourSolution {
    /// Closed tour length, including the edge back to the start.
    pub distance: f64,
    /// Visiting order, starting with the first input city.
    pub order: Vec<City>,
}

/// Builds a closed tour with the nearest-neighbor heuristic.
///
/// Equal distances resolve to the city listed first in the input. Rejects
/// non-finite coordinates and duplicate ids with
/// [`GameError::InvalidInstance`](crate::error::GameError::InvalidInstance).
///
/// # Examples
///
/// ```
/// use u_puzzle::models::City;
/// use u_puzzle::tour::solve_tour;
///
/// let cities = vec![
///     City::new("0", "A", 0.0, 0.0),
///     City::new("1", "B", 3.0, 0.0),
///     City::new("2", "C", 1.0, 0.0),
/// ];
/// let tour = solve_tour(&cities).unwrap();
/// let ids: Vec<&str> = tour.order.iter().map(|c| c.id()).collect();
/// assert_eq!(ids, vec!["0", "2", "1"]);
/// assert!((tour.distance - 6.0).abs() < 1e-10);
/// ```
pub fn solve_tour(cities: &[City]) -> Result<TourSolution> {
    validate_tour(cities)?;

    let n = cities.len();
    if n <= 1 {
        return Ok(TourSolution {
            distance: 0.0,
            order: cities.to_vec(),
        });
    }

    let distances = DistanceMatrix::from_cities(cities);
    let mut remaining: Vec<usize> = (1..n).collect();
    let mut order = Vec::with_capacity(n);
    order.push(0);
    let mut current = 0;
    let mut total = 0.0;

    while let Some(pos) = distances.nearest_neighbor(current, &remaining) {
        let next = remaining.swap_remove(pos);
        let leg = distances.get(current, next);
        trace!(from = current, to = next, leg, "nearest hop");
        total += leg;
        order.push(next);
        current = next;
    }
    total += distances.get(current, 0);

    debug!(cities = n, distance = total, "solved tour");

    Ok(TourSolution {
        distance: total,
        order: order.into_iter().map(|i| cities[i].clone()).collect(),
    })
}

impl TourInstance {
    /// Solves this instance; see [`solve_tour`].
    pub fn solve(&self) -> Result<TourSolution> {
        solve_tour(self.cities())
    }
}
