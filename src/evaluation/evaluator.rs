//! Route evaluator that computes distance, duration and load.

use crate::distance::{DistanceIndex, DistanceMatrix};
use crate::error::SolveError;
use crate::models::{Stop, Vehicle};

/// Distance and estimated driving time of a closed tour.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RouteMetrics {
    /// Closed-tour distance, depot to depot.
    pub distance: f64,
    /// `distance / speed`.
    pub duration: f64,
}

/// Computes the closed-tour distance `depot → tour[0] → … → tour[n-1] → depot`.
///
/// An empty tour has distance zero.
pub fn route_distance(tour: &[usize], depot: usize, distances: &DistanceMatrix) -> f64 {
    let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
        return 0.0;
    };
    let inner: f64 = tour.windows(2).map(|w| distances.get(w[0], w[1])).sum();
    distances.get(depot, first) + inner + distances.get(last, depot)
}

/// Computes route metrics for a tour driven by `vehicle`.
///
/// Fails with [`SolveError::NonPositiveSpeed`] if the vehicle speed is not a
/// positive finite number, even for an empty tour.
pub fn route_metrics(
    tour: &[usize],
    depot: usize,
    vehicle: &Vehicle,
    distances: &DistanceMatrix,
) -> Result<RouteMetrics, SolveError> {
    let speed = vehicle.speed();
    if !(speed.is_finite() && speed > 0.0) {
        return Err(SolveError::NonPositiveSpeed {
            id: vehicle.id().to_owned(),
            speed,
        });
    }
    let distance = route_distance(tour, depot, distances);
    Ok(RouteMetrics {
        distance,
        duration: distance / speed,
    })
}

/// Evaluates tours for one vehicle.
///
/// Tours are given as [`DistanceIndex`] positions; stop positions map back to
/// `stops` in input order.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{Depot, GeoPoint, Stop, Vehicle};
/// use u_mdvrp::distance::DistanceIndex;
/// use u_mdvrp::evaluation::RouteEvaluator;
///
/// let depots = vec![Depot::new("w1", GeoPoint::new(0.0, 0.0).unwrap())];
/// let stops = vec![Stop::new("s1", GeoPoint::new(0.0, 1.0).unwrap(), 30.0)];
/// let index = DistanceIndex::build(&depots, &stops);
/// let vehicle = Vehicle::new("t1", 100.0, 50.0, "w1");
///
/// let eval = RouteEvaluator::new(&index, &stops, &vehicle);
/// let metrics = eval.metrics(0, &[1]).unwrap();
/// assert!((metrics.duration - metrics.distance / 50.0).abs() < 1e-12);
/// assert_eq!(eval.load(&[1]), 30.0);
/// ```
pub struct RouteEvaluator<'a> {
    index: &'a DistanceIndex,
    stops: &'a [Stop],
    vehicle: &'a Vehicle,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given problem data.
    pub fn new(index: &'a DistanceIndex, stops: &'a [Stop], vehicle: &'a Vehicle) -> Self {
        Self {
            index,
            stops,
            vehicle,
        }
    }

    /// Distance and duration of `tour` starting and ending at `depot`.
    pub fn metrics(&self, depot: usize, tour: &[usize]) -> Result<RouteMetrics, SolveError> {
        route_metrics(tour, depot, self.vehicle, self.index.matrix())
    }

    /// Total demand carried on `tour`.
    pub fn load(&self, tour: &[usize]) -> f64 {
        tour.iter()
            .map(|&pos| self.stops[self.index.stop_idx(pos)].demand())
            .sum()
    }

    /// Returns `true` if the tour's load exceeds the vehicle capacity.
    pub fn exceeds_capacity(&self, tour: &[usize]) -> bool {
        self.load(tour) > self.vehicle.capacity()
    }
}
