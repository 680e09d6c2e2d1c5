//! 2-opt improvement over a set of tours under a shared round budget.

use super::two_opt_pass;
use crate::distance::DistanceMatrix;

/// A tour rooted at a depot, in [`DistanceMatrix`] positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    /// Depot position.
    pub depot: usize,
    /// Stop positions in visit order.
    pub stops: Vec<usize>,
}

impl Tour {
    /// Creates a tour.
    pub fn new(depot: usize, stops: Vec<usize>) -> Self {
        Self { depot, stops }
    }
}

/// What [`improve_tours`] did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImprovementSummary {
    /// Rounds executed.
    pub rounds: usize,
    /// Per tour: whether its sequence changed.
    pub changed: Vec<bool>,
}

impl ImprovementSummary {
    /// Number of tours whose sequence changed.
    pub fn num_changed(&self) -> usize {
        self.changed.iter().filter(|&&c| c).count()
    }
}

/// Improves every tour with at least `min_stops` stops by 2-opt.
///
/// Each round gives every not-yet-converged tour one pass; a tour converges
/// when its pass finds no improving move. Stops after `max_rounds` rounds or
/// when all tours have converged.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::GeoPoint;
/// use u_mdvrp::distance::DistanceMatrix;
/// use u_mdvrp::local_search::{improve_tours, Tour};
///
/// let points: Vec<GeoPoint> = [0.0, 1.0, 2.0, 3.0, 4.0]
///     .iter()
///     .map(|&lng| GeoPoint::new(0.0, lng).unwrap())
///     .collect();
/// let dm = DistanceMatrix::from_points(&points);
///
/// let mut tours = vec![Tour::new(0, vec![1, 3, 2, 4]), Tour::new(0, vec![2, 1])];
/// let summary = improve_tours(&mut tours, &dm, 100, 4);
/// assert_eq!(tours[0].stops, vec![1, 2, 3, 4]);
/// assert_eq!(summary.changed, vec![true, false]);
/// ```
pub fn improve_tours(
    tours: &mut [Tour],
    distances: &DistanceMatrix,
    max_rounds: usize,
    min_stops: usize,
) -> ImprovementSummary {
    let mut converged: Vec<bool> = tours.iter().map(|t| t.stops.len() < min_stops).collect();
    let mut summary = ImprovementSummary {
        rounds: 0,
        changed: vec![false; tours.len()],
    };

    while summary.rounds < max_rounds && converged.iter().any(|&c| !c) {
        summary.rounds += 1;
        for (k, tour) in tours.iter_mut().enumerate() {
            if converged[k] {
                continue;
            }
            if two_opt_pass(&mut tour.stops, tour.depot, distances) {
                summary.changed[k] = true;
            } else {
                converged[k] = true;
            }
        }
    }

    summary
}
