//! Validated problem instance.

use std::collections::HashSet;

use tracing::warn;

use crate::distance::DistanceIndex;
use crate::error::SolveError;
use crate::models::{Depot, Stop, Vehicle};

/// A validated multi-depot routing instance with its distance index.
///
/// Construction checks every input rule up front so that a solve either
/// runs to completion or never starts:
///
/// - ids are unique across depots and stops, and among vehicles
/// - stop demands are finite and non-negative
/// - vehicle capacities and speeds are finite and positive
///
/// A vehicle whose home depot is not in the instance cannot serve any stop.
/// It is kept out of the per-depot fleets and listed by
/// [`Problem::orphaned_vehicles`].
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{Depot, GeoPoint, Stop, Vehicle};
/// use u_mdvrp::solver::Problem;
///
/// let problem = Problem::new(
///     vec![Depot::new("w1", GeoPoint::new(0.0, 0.0).unwrap())],
///     vec![Stop::new("s1", GeoPoint::new(0.0, 1.0).unwrap(), 10.0)],
///     vec![Vehicle::new("t1", 100.0, 50.0, "w1")],
/// )
/// .unwrap();
/// assert_eq!(problem.vehicles_of(0), &[0]);
///
/// let err = Problem::new(vec![], vec![], vec![Vehicle::new("t1", 100.0, 0.0, "w1")]);
/// assert!(err.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    depots: Vec<Depot>,
    stops: Vec<Stop>,
    vehicles: Vec<Vehicle>,
    vehicles_by_depot: Vec<Vec<usize>>,
    orphaned: Vec<usize>,
    index: DistanceIndex,
}

impl Problem {
    /// Validates the input and precomputes all pairwise distances.
    pub fn new(
        depots: Vec<Depot>,
        stops: Vec<Stop>,
        vehicles: Vec<Vehicle>,
    ) -> Result<Self, SolveError> {
        let mut location_ids = HashSet::with_capacity(depots.len() + stops.len());
        for id in depots.iter().map(Depot::id).chain(stops.iter().map(Stop::id)) {
            if !location_ids.insert(id) {
                return Err(SolveError::DuplicateId(id.to_owned()));
            }
        }

        for stop in &stops {
            let demand = stop.demand();
            if !demand.is_finite() || demand < 0.0 {
                return Err(SolveError::InvalidDemand {
                    id: stop.id().to_owned(),
                    demand,
                });
            }
        }

        let mut vehicle_ids = HashSet::with_capacity(vehicles.len());
        let mut vehicles_by_depot = vec![Vec::new(); depots.len()];
        let mut orphaned = Vec::new();
        for (v, vehicle) in vehicles.iter().enumerate() {
            if !vehicle_ids.insert(vehicle.id()) {
                return Err(SolveError::DuplicateId(vehicle.id().to_owned()));
            }
            let capacity = vehicle.capacity();
            if !capacity.is_finite() || capacity <= 0.0 {
                return Err(SolveError::InvalidCapacity {
                    id: vehicle.id().to_owned(),
                    capacity,
                });
            }
            let speed = vehicle.speed();
            if !speed.is_finite() || speed <= 0.0 {
                return Err(SolveError::NonPositiveSpeed {
                    id: vehicle.id().to_owned(),
                    speed,
                });
            }
            match depots.iter().position(|d| d.id() == vehicle.depot_id()) {
                Some(d) => vehicles_by_depot[d].push(v),
                None => {
                    warn!(
                        vehicle_id = %vehicle.id(),
                        depot_id = %vehicle.depot_id(),
                        "Vehicle references unknown depot; left unused"
                    );
                    orphaned.push(v);
                }
            }
        }

        let index = DistanceIndex::build(&depots, &stops);
        Ok(Self {
            depots,
            stops,
            vehicles,
            vehicles_by_depot,
            orphaned,
            index,
        })
    }

    /// Depots in input order.
    pub fn depots(&self) -> &[Depot] {
        &self.depots
    }

    /// Stops in input order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Vehicles in input order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Indices of the vehicles based at the depot at `depot_idx`, in input
    /// order.
    pub fn vehicles_of(&self, depot_idx: usize) -> &[usize] {
        &self.vehicles_by_depot[depot_idx]
    }

    /// Indices of vehicles whose home depot is not in the instance.
    pub fn orphaned_vehicles(&self) -> &[usize] {
        &self.orphaned
    }

    /// Pairwise distances among depots and stops.
    pub fn distance_index(&self) -> &DistanceIndex {
        &self.index
    }
}
