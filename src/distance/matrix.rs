//! Pairwise leg lengths between tour cities.

use crate::models::City;

/// Euclidean leg lengths between every pair of cities, row-major.
///
/// Row `i` holds the legs leaving the `i`-th city of the slice the matrix
/// was built from.
///
/// # Examples
///
/// ```
/// use u_puzzle::models::City;
/// use u_puzzle::distance::DistanceMatrix;
///
/// let cities = vec![
///     City::new("1", "A", 0.0, 0.0),
///     City::new("2", "B", 3.0, 4.0),
///     City::new("3", "C", 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    legs: Vec<f64>,
    stride: usize,
}

impl DistanceMatrix {
    /// Measures every leg between the given cities.
    pub fn from_cities(cities: &[City]) -> Self {
        let legs = cities
            .iter()
            .flat_map(|from| cities.iter().map(move |to| from.distance_to(to)))
            .collect();
        Self {
            legs,
            stride: cities.len(),
        }
    }

    /// Leg length from city `from` to city `to`, by slice position.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.legs[from * self.stride + to]
    }

    /// Number of cities covered.
    pub fn size(&self) -> usize {
        self.stride
    }

    /// Returns the position in `candidates` of the city nearest to `from`.
    ///
    /// Equal distances resolve to the lowest city index, whatever the
    /// order of `candidates`. Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .enumerate()
            .min_by(|&(_, &a), &(_, &b)| {
                self.get(from, a)
                    .total_cmp(&self.get(from, b))
                    .then(a.cmp(&b))
            })
            .map(|(pos, _)| pos)
    }
}
