//! Path length helpers.

use crate::models::City;

/// Sum of consecutive leg lengths along `path`, without closing the loop.
pub fn open_length(path: &[City]) -> f64 {
    path.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

/// Length of `path` as a closed tour, including the edge back to the start.
///
/// Paths with fewer than two cities have length zero.
///
/// # Examples
///
/// ```
/// use u_puzzle::models::City;
/// use u_puzzle::tour::{closed_length, open_length};
///
/// let path = vec![
///     City::new("a", "A", 0.0, 0.0),
///     City::new("b", "B", 3.0, 0.0),
///     City::new("c", "C", 3.0, 4.0),
/// ];
/// assert!((open_length(&path) - 7.0).abs() < 1e-10);
/// assert!((closed_length(&path) - 12.0).abs() < 1e-10);
/// ```
pub fn closed_length(path: &[City]) -> f64 {
    match (path.first(), path.last()) {
        (Some(first), Some(last)) if path.len() > 1 => open_length(path) + last.distance_to(first),
        _ => 0.0,
    }
}
