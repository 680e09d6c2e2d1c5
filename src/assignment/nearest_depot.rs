//! Nearest-depot assignment of stops.
//!
//! Every stop goes to the depot with the smallest great-circle distance. A
//! single scan over depots per stop, O(D·S).

use crate::distance::DistanceIndex;

/// Stops grouped by their assigned depot.
///
/// Indices are input-order indices into the problem's depots and stops.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepotAssignment {
    stops_by_depot: Vec<Vec<usize>>,
    unassigned: Vec<usize>,
}

impl DepotAssignment {
    /// Stops assigned to the depot at `depot_idx`, in stop input order.
    pub fn stops_of(&self, depot_idx: usize) -> &[usize] {
        &self.stops_by_depot[depot_idx]
    }

    /// Iterates over `(depot_idx, stops)` for every depot, including those
    /// with no stops.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.stops_by_depot
            .iter()
            .enumerate()
            .map(|(d, stops)| (d, stops.as_slice()))
    }

    /// Stops that could not be assigned because there are no depots.
    pub fn unassigned(&self) -> &[usize] {
        &self.unassigned
    }

    /// Number of depots covered.
    pub fn num_depots(&self) -> usize {
        self.stops_by_depot.len()
    }

    /// Id-level view: every depot id with its assigned stop ids.
    pub fn to_ids<'a>(&self, index: &'a DistanceIndex) -> Vec<(&'a str, Vec<&'a str>)> {
        self.iter()
            .map(|(d, stops)| {
                (
                    index.id(index.depot_position(d)),
                    stops
                        .iter()
                        .map(|&s| index.id(index.stop_position(s)))
                        .collect(),
                )
            })
            .collect()
    }
}

/// Assigns every stop to its nearest depot.
///
/// Ties go to the depot that comes first in input order.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{Depot, GeoPoint, Stop};
/// use u_mdvrp::distance::DistanceIndex;
/// use u_mdvrp::assignment::assign_to_nearest_depot;
///
/// let depots = vec![
///     Depot::new("west", GeoPoint::new(0.0, 0.0).unwrap()),
///     Depot::new("east", GeoPoint::new(0.0, 10.0).unwrap()),
/// ];
/// let stops = vec![
///     Stop::new("a", GeoPoint::new(0.0, 9.0).unwrap(), 1.0),
///     Stop::new("b", GeoPoint::new(0.0, 1.0).unwrap(), 1.0),
/// ];
/// let index = DistanceIndex::build(&depots, &stops);
/// let assignment = assign_to_nearest_depot(&index);
/// assert_eq!(assignment.stops_of(0), &[1]);
/// assert_eq!(assignment.stops_of(1), &[0]);
/// ```
pub fn assign_to_nearest_depot(index: &DistanceIndex) -> DepotAssignment {
    let num_depots = index.num_depots();
    let mut assignment = DepotAssignment {
        stops_by_depot: vec![Vec::new(); num_depots],
        unassigned: Vec::new(),
    };

    for s in 0..index.num_stops() {
        let stop_pos = index.stop_position(s);
        let mut best: Option<(usize, f64)> = None;
        for d in 0..num_depots {
            let dist = index.get(index.depot_position(d), stop_pos);
            let closer = match best {
                Some((_, best_dist)) => dist < best_dist,
                None => true,
            };
            if closer {
                best = Some((d, dist));
            }
        }

        match best {
            Some((d, _)) => assignment.stops_by_depot[d].push(s),
            None => assignment.unassigned.push(s),
        }
    }

    assignment
}
