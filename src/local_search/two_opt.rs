//! Intra-route 2-opt improvement.
//!
//! # Algorithm
//!
//! For positions i < j in a tour, reversing the segment `[i..=j]` replaces
//! edges (prev(i), r[i]) and (r[j], next(j)) with (prev(i), r[j]) and
//! (r[i], next(j)), where prev/next fall back to the depot at the ends:
//!
//! ```text
//! delta = d(prev, r[j]) + d(r[i], next) - d(prev, r[i]) - d(r[j], next)
//! ```
//!
//! A pass scans all (i, j) pairs in order and applies every reversal with
//! delta < 0 immediately (first improvement). Passes repeat until one finds
//! nothing or the pass budget runs out. Distances must be symmetric.
//!
//! # Complexity
//!
//! O(n²) per pass.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::evaluation::route_distance;

/// Smallest distance reduction accepted as an improvement.
const IMPROVEMENT_EPSILON: f64 = 1e-10;

/// Runs one 2-opt pass over `tour` in place.
///
/// Returns `true` if at least one improving reversal was applied.
pub fn two_opt_pass(tour: &mut [usize], depot: usize, distances: &DistanceMatrix) -> bool {
    let n = tour.len();
    if n < 2 {
        return false;
    }

    let mut improved = false;
    for i in 0..n - 1 {
        for j in i + 1..n {
            if two_opt_delta(tour, depot, distances, i, j) < -IMPROVEMENT_EPSILON {
                tour[i..=j].reverse();
                improved = true;
            }
        }
    }
    improved
}

/// Applies 2-opt passes to a tour until a local optimum or `max_passes`.
///
/// Returns the improved tour and its closed-tour distance.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::GeoPoint;
/// use u_mdvrp::distance::DistanceMatrix;
/// use u_mdvrp::evaluation::route_distance;
/// use u_mdvrp::local_search::two_opt_improve;
///
/// let points = vec![
///     GeoPoint::new(0.0, 0.0).unwrap(), // depot
///     GeoPoint::new(0.0, 1.0).unwrap(),
///     GeoPoint::new(0.0, 2.0).unwrap(),
///     GeoPoint::new(0.0, 3.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
///
/// let (improved, dist) = two_opt_improve(&[2, 1, 3], 0, &dm, 100);
/// assert!(dist < route_distance(&[2, 1, 3], 0, &dm));
/// assert_eq!(improved, vec![1, 2, 3]);
/// ```
pub fn two_opt_improve(
    tour: &[usize],
    depot: usize,
    distances: &DistanceMatrix,
    max_passes: usize,
) -> (Vec<usize>, f64) {
    let mut current = tour.to_vec();
    for _ in 0..max_passes {
        if !two_opt_pass(&mut current, depot, distances) {
            break;
        }
    }
    let dist = route_distance(&current, depot, distances);
    (current, dist)
}

/// Distance change from reversing `route[i..=j]`.
fn two_opt_delta(
    route: &[usize],
    depot: usize,
    distances: &DistanceMatrix,
    i: usize,
    j: usize,
) -> f64 {
    let n = route.len();
    let prev_i = if i == 0 { depot } else { route[i - 1] };
    let next_j = if j == n - 1 { depot } else { route[j + 1] };

    let old_cost = distances.get(prev_i, route[i]) + distances.get(route[j], next_j);
    let new_cost = distances.get(prev_i, route[j]) + distances.get(route[i], next_j);

    new_cost - old_cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoPoint;

    fn matrix(points: &[(f64, f64)]) -> DistanceMatrix {
        let points: Vec<GeoPoint> = points
            .iter()
            .map(|&(lat, lng)| GeoPoint::new(lat, lng).expect("valid"))
            .collect();
        DistanceMatrix::from_points(&points)
    }

    fn line() -> DistanceMatrix {
        matrix(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (0.0, 3.0)])
    }

    #[test]
    fn test_2opt_already_optimal() {
        let dm = line();
        let mut tour = vec![1, 2, 3];
        assert!(!two_opt_pass(&mut tour, 0, &dm));
        assert_eq!(tour, vec![1, 2, 3]);
        let (improved, dist) = two_opt_improve(&[1, 2, 3], 0, &dm, 10);
        assert_eq!(improved, vec![1, 2, 3]);
        assert!((dist - route_distance(&[1, 2, 3], 0, &dm)).abs() < 1e-12);
    }

    #[test]
    fn test_2opt_removes_crossing() {
        // Square around the depot; visiting diagonally opposite corners
        // consecutively crosses the tour.
        let dm = matrix(&[(0.0, 0.0), (1.0, 1.0), (-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0)]);
        let initial = [1, 2, 3, 4];
        let before = route_distance(&initial, 0, &dm);
        let (improved, after) = two_opt_improve(&initial, 0, &dm, 100);
        assert!(after < before - 1e-6);
        let mut sorted = improved.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_2opt_empty_and_single() {
        let dm = line();
        let (empty, dist) = two_opt_improve(&[], 0, &dm, 10);
        assert!(empty.is_empty());
        assert_eq!(dist, 0.0);

        let (single, dist) = two_opt_improve(&[2], 0, &dm, 10);
        assert_eq!(single, vec![2]);
        assert!((dist - 2.0 * dm.get(0, 2)).abs() < 1e-12);
    }

    #[test]
    fn test_2opt_zero_budget_is_noop() {
        let dm = line();
        let (tour, _) = two_opt_improve(&[3, 1, 2], 0, &dm, 0);
        assert_eq!(tour, vec![3, 1, 2]);
    }

    #[test]
    fn test_2opt_idempotent() {
        let dm = matrix(&[
            (5.0, 5.0),
            (0.0, 0.0),
            (10.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
            (3.0, 7.0),
        ]);
        let (once, d1) = two_opt_improve(&[1, 4, 2, 3, 5], 0, &dm, 100);
        let (twice, d2) = two_opt_improve(&once, 0, &dm, 100);
        assert_eq!(once, twice);
        assert_eq!(d1, d2);
    }

    #[test]
    fn test_pass_never_worsens() {
        let dm = matrix(&[
            (5.0, 5.0),
            (0.0, 0.0),
            (10.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
        ]);
        let mut tour = vec![1, 4, 2, 3];
        let mut prev = route_distance(&tour, 0, &dm);
        while two_opt_pass(&mut tour, 0, &dm) {
            let now = route_distance(&tour, 0, &dm);
            assert!(now < prev);
            prev = now;
        }
    }
}
