//! Nearest-neighbor tour construction.
//!
//! Starting from the depot, always move to the nearest unvisited stop until
//! none remain.
//!
//! # Complexity
//!
//! O(n²) where n = number of stops in the tour.

use crate::distance::DistanceMatrix;

/// Orders `stops` into a tour by the nearest-neighbor rule.
///
/// Positions refer to rows of `distances`. Ties go to the stop listed first
/// in `stops`. An empty input yields an empty tour.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::GeoPoint;
/// use u_mdvrp::distance::DistanceMatrix;
/// use u_mdvrp::constructive::nearest_neighbor_tour;
///
/// let points = vec![
///     GeoPoint::new(0.0, 0.0).unwrap(), // depot
///     GeoPoint::new(0.0, 3.0).unwrap(),
///     GeoPoint::new(0.0, 1.0).unwrap(),
///     GeoPoint::new(0.0, 2.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert_eq!(nearest_neighbor_tour(0, &[1, 2, 3], &dm), vec![2, 3, 1]);
/// ```
pub fn nearest_neighbor_tour(depot: usize, stops: &[usize], distances: &DistanceMatrix) -> Vec<usize> {
    let mut unvisited = stops.to_vec();
    let mut tour = Vec::with_capacity(stops.len());
    let mut current = depot;

    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        if let Some(slot) = unvisited.iter().position(|&s| s == next) {
            unvisited.remove(slot);
        }
        tour.push(next);
        current = next;
    }

    tour
}
