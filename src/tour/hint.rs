//! Nearest-unvisited-city hint.

use crate::models::City;

/// Suggests the unvisited city nearest to the end of `path`.
///
/// Returns `None` for an empty path, since every start is equally good for
/// the heuristic, and when all cities have been visited. The first city in
/// `cities` wins among equal distances.
///
/// # Examples
///
/// ```
/// use u_puzzle::models::City;
/// use u_puzzle::tour::nearest_hint;
///
/// let cities = vec![
///     City::new("a", "A", 0.0, 0.0),
///     City::new("b", "B", 5.0, 0.0),
///     City::new("c", "C", 1.0, 0.0),
/// ];
/// assert!(nearest_hint(&cities, &[]).is_none());
/// let hint = nearest_hint(&cities, &cities[..1]).unwrap();
/// assert_eq!(hint.id(), "c");
/// ```
pub fn nearest_hint<'a>(cities: &'a [City], path: &[City]) -> Option<&'a City> {
    let last = path.last()?;
    cities
        .iter()
        .filter(|c| !path.iter().any(|p| p.id() == c.id()))
        .fold(None, |best: Option<&City>, city| match best {
            Some(b) if last.distance_to(city) >= last.distance_to(b) => Some(b),
            _ => Some(city),
        })
}
