//! Solution and unserved-demand diagnostic types.

use super::Route;

/// Why a group of stops could not be served within capacity.
#[derive(Debug, Clone, PartialEq)]
pub enum UnservedDemandKind {
    /// Stops left over after packing were forced onto the depot's first
    /// vehicle, exceeding its capacity.
    Overflow {
        /// Vehicle that received the overflow.
        vehicle_id: String,
        /// Total demand carried after the overflow.
        load: f64,
        /// Vehicle capacity.
        capacity: f64,
    },
    /// The depot has assigned stops but no vehicles; the stops are dropped.
    NoVehicle {
        /// Depot without vehicles.
        depot_id: String,
    },
    /// There are no depots at all; the stops are dropped.
    NoDepot,
}

/// A non-fatal capacity condition detected during a solve.
#[derive(Debug, Clone, PartialEq)]
pub struct UnservedDemand {
    /// The condition.
    pub kind: UnservedDemandKind,
    /// Stops affected, in the order they were encountered.
    pub stop_ids: Vec<String>,
}

impl UnservedDemand {
    /// Creates a new diagnostic.
    pub fn new(kind: UnservedDemandKind, stop_ids: Vec<String>) -> Self {
        Self { kind, stop_ids }
    }

    /// Returns `true` if the affected stops are missing from every route.
    pub fn is_dropped(&self) -> bool {
        !matches!(self.kind, UnservedDemandKind::Overflow { .. })
    }
}

/// The result of one solve: routes plus unserved-demand diagnostics.
///
/// # Examples
///
/// ```
/// use jiff::Timestamp;
/// use u_mdvrp::models::{Route, Solution};
///
/// let mut sol = Solution::new();
/// sol.add_route(Route::new("r1", "w1", "t1", vec!["s1".into()], Timestamp::UNIX_EPOCH));
/// assert_eq!(sol.num_routes(), 1);
/// assert_eq!(sol.num_served(), 1);
/// assert!(sol.unserved().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solution {
    routes: Vec<Route>,
    unserved: Vec<UnservedDemand>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a route to this solution.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Records an unserved-demand condition.
    pub fn add_unserved(&mut self, unserved: UnservedDemand) {
        self.unserved.push(unserved);
    }

    /// Returns the routes in emission order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns a mutable reference to the routes.
    pub fn routes_mut(&mut self) -> &mut Vec<Route> {
        &mut self.routes
    }

    /// Number of routes (vehicles used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Unserved-demand diagnostics.
    pub fn unserved(&self) -> &[UnservedDemand] {
        &self.unserved
    }

    /// IDs of stops that appear in no route.
    pub fn dropped_stop_ids(&self) -> Vec<&str> {
        self.unserved
            .iter()
            .filter(|u| u.is_dropped())
            .flat_map(|u| u.stop_ids.iter().map(String::as_str))
            .collect()
    }

    /// Total distance across all routes.
    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(|r| r.total_distance()).sum()
    }

    /// Total number of stops served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;

    #[test]
    fn test_solution_empty() {
        let sol = Solution::new();
        assert_eq!(sol.num_routes(), 0);
        assert_eq!(sol.num_served(), 0);
        assert_eq!(sol.total_distance(), 0.0);
        assert!(sol.dropped_stop_ids().is_empty());
    }

    #[test]
    fn test_solution_totals() {
        let mut sol = Solution::new();
        let mut r1 = Route::new("r1", "w1", "t1", vec!["a".into()], Timestamp::UNIX_EPOCH);
        r1.set_total_distance(50.0);
        let mut r2 = Route::new(
            "r2",
            "w1",
            "t2",
            vec!["b".into(), "c".into()],
            Timestamp::UNIX_EPOCH,
        );
        r2.set_total_distance(80.0);
        sol.add_route(r1);
        sol.add_route(r2);
        assert_eq!(sol.num_routes(), 2);
        assert_eq!(sol.num_served(), 3);
        assert!((sol.total_distance() - 130.0).abs() < 1e-10);
    }

    #[test]
    fn test_dropped_vs_overflow() {
        let mut sol = Solution::new();
        sol.add_unserved(UnservedDemand::new(
            UnservedDemandKind::Overflow {
                vehicle_id: "t1".into(),
                load: 180.0,
                capacity: 100.0,
            },
            vec!["a".into()],
        ));
        sol.add_unserved(UnservedDemand::new(
            UnservedDemandKind::NoVehicle {
                depot_id: "w2".into(),
            },
            vec!["b".into(), "c".into()],
        ));
        assert!(!sol.unserved()[0].is_dropped());
        assert!(sol.unserved()[1].is_dropped());
        assert_eq!(sol.dropped_stop_ids(), vec!["b", "c"]);
    }
}
