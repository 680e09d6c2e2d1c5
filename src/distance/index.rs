//! Id-keyed distance lookup over depots and stops.

use std::collections::HashMap;

use super::DistanceMatrix;
use crate::models::{Depot, GeoPoint, Stop};

/// Precomputed great-circle distances among all depots and stops.
///
/// Locations are laid out in a single [`DistanceMatrix`]: positions
/// `0..num_depots` hold the depots in input order, followed by the stops in
/// input order. Lookups by id and by position are both O(1).
///
/// Ids must be unique across depots and stops.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{Depot, GeoPoint, Stop};
/// use u_mdvrp::distance::DistanceIndex;
///
/// let depots = vec![Depot::new("w1", GeoPoint::new(0.0, 0.0).unwrap())];
/// let stops = vec![Stop::new("s1", GeoPoint::new(0.0, 1.0).unwrap(), 5.0)];
/// let index = DistanceIndex::build(&depots, &stops);
///
/// assert_eq!(index.distance("w1", "s1"), index.distance("s1", "w1"));
/// assert_eq!(index.distance("s1", "s1"), 0.0);
/// assert_eq!(index.stop_position(0), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceIndex {
    matrix: DistanceMatrix,
    ids: Vec<String>,
    positions: HashMap<String, usize>,
    num_depots: usize,
}

impl DistanceIndex {
    /// Computes distances for every depot×depot, depot×stop and stop×stop
    /// pair.
    pub fn build(depots: &[Depot], stops: &[Stop]) -> Self {
        let points: Vec<GeoPoint> = depots
            .iter()
            .map(|d| *d.location())
            .chain(stops.iter().map(|s| *s.location()))
            .collect();
        let ids: Vec<String> = depots
            .iter()
            .map(|d| d.id().to_owned())
            .chain(stops.iter().map(|s| s.id().to_owned()))
            .collect();

        let positions: HashMap<String, usize> = ids
            .iter()
            .enumerate()
            .map(|(pos, id)| (id.clone(), pos))
            .collect();
        debug_assert_eq!(positions.len(), ids.len(), "location ids must be unique");

        Self {
            matrix: DistanceMatrix::from_points(&points),
            ids,
            positions,
            num_depots: depots.len(),
        }
    }

    /// Distance between two locations given by id.
    ///
    /// # Panics
    ///
    /// Panics if either id is unknown.
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        self.matrix.get(self.position(a), self.position(b))
    }

    /// Distance between two locations given by position.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.matrix.get(from, to)
    }

    /// Matrix position of the location with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id is unknown.
    pub fn position(&self, id: &str) -> usize {
        match self.positions.get(id) {
            Some(&pos) => pos,
            None => panic!("unknown location id: {id}"),
        }
    }

    /// Matrix position of the location with the given id, if known.
    pub fn try_position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Matrix position of the depot at `depot_idx` in input order.
    pub fn depot_position(&self, depot_idx: usize) -> usize {
        debug_assert!(depot_idx < self.num_depots);
        depot_idx
    }

    /// Matrix position of the stop at `stop_idx` in input order.
    pub fn stop_position(&self, stop_idx: usize) -> usize {
        self.num_depots + stop_idx
    }

    /// Input-order index of the stop at matrix position `pos`.
    pub fn stop_idx(&self, pos: usize) -> usize {
        debug_assert!(pos >= self.num_depots);
        pos - self.num_depots
    }

    /// Id of the location at matrix position `pos`.
    pub fn id(&self, pos: usize) -> &str {
        &self.ids[pos]
    }

    /// Number of depots.
    pub fn num_depots(&self) -> usize {
        self.num_depots
    }

    /// Number of stops.
    pub fn num_stops(&self) -> usize {
        self.ids.len() - self.num_depots
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }
}
