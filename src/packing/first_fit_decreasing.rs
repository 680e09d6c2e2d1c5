//! First-fit-decreasing packing of a depot's stops into its vehicles.
//!
//! # Algorithm
//!
//! 1. Sort the stops by demand, largest first (stable).
//! 2. For each vehicle in order, scan the remaining pool from the largest
//!    demand down and take every stop that still fits the residual capacity.
//! 3. Whatever remains after the last vehicle is appended to the first
//!    vehicle regardless of capacity, so no delivery is dropped while the
//!    depot has at least one vehicle.
//!
//! Because residual capacity only shrinks, a single forward scan takes exactly
//! the stops that "largest remaining that fits" would take one by one.
//!
//! # Complexity
//!
//! O(S log S + V·S) for S stops and V vehicles.

use crate::models::Stop;

/// Stops packed per vehicle for one depot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Packing {
    per_vehicle: Vec<Vec<usize>>,
    overflow: Vec<usize>,
    dropped: Vec<usize>,
}

impl Packing {
    /// Stops loaded on each vehicle, in the order they were taken.
    ///
    /// Same length as the capacities given to
    /// [`pack_first_fit_decreasing`]. The first entry includes any
    /// overflow.
    pub fn per_vehicle(&self) -> &[Vec<usize>] {
        &self.per_vehicle
    }

    /// Stops force-appended to the first vehicle beyond its capacity.
    pub fn overflow(&self) -> &[usize] {
        &self.overflow
    }

    /// Stops left unserved because there were no vehicles.
    pub fn dropped(&self) -> &[usize] {
        &self.dropped
    }

    /// Consumes the packing, returning the per-vehicle stop lists.
    pub fn into_per_vehicle(self) -> Vec<Vec<usize>> {
        self.per_vehicle
    }
}

/// Packs `assigned` stops into vehicles with the given capacities.
///
/// `assigned` holds indices into `stops`; the output uses the same indices.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{GeoPoint, Stop};
/// use u_mdvrp::packing::pack_first_fit_decreasing;
///
/// let here = GeoPoint::new(0.0, 0.0).unwrap();
/// let stops = vec![
///     Stop::new("a", here, 30.0),
///     Stop::new("b", here, 70.0),
///     Stop::new("c", here, 50.0),
/// ];
/// let packing = pack_first_fit_decreasing(&[0, 1, 2], &stops, &[100.0, 100.0]);
/// assert_eq!(packing.per_vehicle(), &[vec![1, 0], vec![2]]);
/// assert!(packing.overflow().is_empty());
/// ```
pub fn pack_first_fit_decreasing(assigned: &[usize], stops: &[Stop], capacities: &[f64]) -> Packing {
    if capacities.is_empty() {
        return Packing {
            per_vehicle: Vec::new(),
            overflow: Vec::new(),
            dropped: assigned.to_vec(),
        };
    }

    let mut pool = assigned.to_vec();
    pool.sort_by(|&a, &b| stops[b].demand().total_cmp(&stops[a].demand()));

    let mut per_vehicle = Vec::with_capacity(capacities.len());
    for &capacity in capacities {
        let mut load = 0.0;
        let mut taken = Vec::new();
        pool.retain(|&s| {
            let demand = stops[s].demand();
            if load + demand <= capacity {
                load += demand;
                taken.push(s);
                false
            } else {
                true
            }
        });
        per_vehicle.push(taken);
    }

    let overflow = pool;
    per_vehicle[0].extend_from_slice(&overflow);

    Packing {
        per_vehicle,
        overflow,
        dropped: Vec::new(),
    }
}
