//! Multi-depot solve pipeline.
//!
//! assign → pack → construct → improve → emit, in a single pass. Packing and
//! construction are independent per depot; improvement starts only after
//! every initial route exists.

use jiff::Timestamp;
use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

use super::{Problem, SolverConfig};
use crate::assignment::{assign_to_nearest_depot, DepotAssignment};
use crate::constructive::nearest_neighbor_tour;
use crate::error::SolveError;
use crate::evaluation::RouteEvaluator;
use crate::local_search::{improve_tours, Tour};
use crate::models::{
    Depot, Route, Solution, Stop, UnservedDemand, UnservedDemandKind, Vehicle,
};
use crate::packing::pack_first_fit_decreasing;

/// Initial tours and diagnostics for one depot.
#[derive(Debug, Default)]
struct DepotPlan {
    /// `(vehicle index, tour)` in vehicle order.
    tours: Vec<(usize, Tour)>,
    unserved: Vec<UnservedDemand>,
}

/// Multi-depot vehicle routing solver.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{Depot, GeoPoint, Stop, Vehicle};
/// use u_mdvrp::solver::{MdvrpSolver, Problem, SolverConfig};
///
/// let problem = Problem::new(
///     vec![Depot::new("w1", GeoPoint::new(0.0, 0.0).unwrap())],
///     vec![
///         Stop::new("far", GeoPoint::new(0.0, 2.0).unwrap(), 10.0),
///         Stop::new("near", GeoPoint::new(0.0, 1.0).unwrap(), 10.0),
///     ],
///     vec![Vehicle::new("t1", 100.0, 50.0, "w1")],
/// )
/// .unwrap();
///
/// let solver = MdvrpSolver::new(SolverConfig::default());
/// let solution = solver.solve(&problem).unwrap();
/// assert_eq!(solution.num_routes(), 1);
/// assert_eq!(solution.routes()[0].stop_ids(), &["near".to_string(), "far".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MdvrpSolver {
    config: SolverConfig,
}

impl MdvrpSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves `problem`, stamping routes with the current time.
    pub fn solve(&self, problem: &Problem) -> Result<Solution, SolveError> {
        self.solve_at(problem, Timestamp::now())
    }

    /// Solves `problem`, stamping every route with `created`.
    ///
    /// Route ids are `route_<n>_<unix millis of created>` with `n` counting
    /// from 1 in emission order: depots in input order, then vehicles in
    /// input order.
    #[instrument(skip_all, level = "debug")]
    pub fn solve_at(&self, problem: &Problem, created: Timestamp) -> Result<Solution, SolveError> {
        let index = problem.distance_index();
        let assignment = assign_to_nearest_depot(index);
        debug!(
            depots = problem.depots().len(),
            stops = problem.stops().len(),
            vehicles = problem.vehicles().len(),
            "Assigned stops to nearest depots"
        );

        let mut solution = Solution::new();
        if !assignment.unassigned().is_empty() {
            let unserved = UnservedDemand::new(
                UnservedDemandKind::NoDepot,
                stop_ids(problem.stops(), assignment.unassigned()),
            );
            warn!(stops = ?unserved.stop_ids, "No depots; stops dropped");
            solution.add_unserved(unserved);
        }

        let plans: Vec<DepotPlan> = if self.config.parallel {
            (0..assignment.num_depots())
                .into_par_iter()
                .map(|d| plan_depot(problem, &assignment, d))
                .collect()
        } else {
            (0..assignment.num_depots())
                .map(|d| plan_depot(problem, &assignment, d))
                .collect()
        };

        let mut tours = Vec::new();
        let mut route_vehicles = Vec::new();
        for plan in plans {
            for unserved in plan.unserved {
                match &unserved.kind {
                    UnservedDemandKind::Overflow {
                        vehicle_id,
                        load,
                        capacity,
                    } => warn!(
                        vehicle_id = %vehicle_id,
                        load,
                        capacity,
                        stops = ?unserved.stop_ids,
                        "Capacity exhausted; remaining stops forced onto first vehicle"
                    ),
                    UnservedDemandKind::NoVehicle { depot_id } => warn!(
                        depot_id = %depot_id,
                        stops = ?unserved.stop_ids,
                        "Depot has no vehicles; stops dropped"
                    ),
                    UnservedDemandKind::NoDepot => {}
                }
                solution.add_unserved(unserved);
            }

            for (v, tour) in plan.tours {
                let vehicle = &problem.vehicles()[v];
                let depot = &problem.depots()[tour.depot];
                let route_no = solution.num_routes() + 1;
                let mut route = Route::new(
                    format!("route_{}_{}", route_no, created.as_millisecond()),
                    depot.id(),
                    vehicle.id(),
                    tour_stop_ids(problem, &tour),
                    created,
                );
                set_metrics(&mut route, problem, vehicle, &tour)?;
                solution.add_route(route);
                tours.push(tour);
                route_vehicles.push(v);
            }
        }
        debug!(routes = solution.num_routes(), "Constructed initial routes");

        let summary = improve_tours(
            &mut tours,
            index.matrix(),
            self.config.max_improvement_rounds,
            self.config.min_stops_for_improvement,
        );

        for (k, route) in solution.routes_mut().iter_mut().enumerate() {
            if !summary.changed[k] {
                continue;
            }
            let before = route.total_distance();
            let vehicle = &problem.vehicles()[route_vehicles[k]];
            route.set_stop_ids(tour_stop_ids(problem, &tours[k]));
            set_metrics(route, problem, vehicle, &tours[k])?;
            debug!(
                route = route.id(),
                before,
                after = route.total_distance(),
                "2-opt improved route"
            );
        }

        info!(
            routes = solution.num_routes(),
            served = solution.num_served(),
            unserved = solution.unserved().len(),
            improved = summary.num_changed(),
            rounds = summary.rounds,
            total_distance = solution.total_distance(),
            "Solve finished"
        );
        Ok(solution)
    }
}

/// Solves with the default configuration.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{Depot, GeoPoint, Stop};
/// use u_mdvrp::solver::solve;
///
/// let depots = vec![Depot::new("w1", GeoPoint::new(0.0, 0.0).unwrap())];
/// let stops = vec![Stop::new("s1", GeoPoint::new(0.0, 1.0).unwrap(), 1.0)];
///
/// // No vehicles: the stop is dropped, not an error.
/// let solution = solve(depots, stops, vec![]).unwrap();
/// assert_eq!(solution.num_routes(), 0);
/// assert_eq!(solution.dropped_stop_ids(), vec!["s1"]);
/// ```
pub fn solve(
    depots: Vec<Depot>,
    stops: Vec<Stop>,
    vehicles: Vec<Vehicle>,
) -> Result<Solution, SolveError> {
    let problem = Problem::new(depots, stops, vehicles)?;
    MdvrpSolver::default().solve(&problem)
}

/// Packs the depot's stops into its vehicles and builds a tour per vehicle.
fn plan_depot(problem: &Problem, assignment: &DepotAssignment, d: usize) -> DepotPlan {
    let assigned = assignment.stops_of(d);
    if assigned.is_empty() {
        return DepotPlan::default();
    }

    let depot = &problem.depots()[d];
    let vehicles = problem.vehicles_of(d);
    if vehicles.is_empty() {
        return DepotPlan {
            tours: Vec::new(),
            unserved: vec![UnservedDemand::new(
                UnservedDemandKind::NoVehicle {
                    depot_id: depot.id().to_owned(),
                },
                stop_ids(problem.stops(), assigned),
            )],
        };
    }

    let capacities: Vec<f64> = vehicles
        .iter()
        .map(|&v| problem.vehicles()[v].capacity())
        .collect();
    let packing = pack_first_fit_decreasing(assigned, problem.stops(), &capacities);

    let overflow = stop_ids(problem.stops(), packing.overflow());
    let index = problem.distance_index();
    let depot_pos = index.depot_position(d);
    let mut plan = DepotPlan::default();
    for (k, load) in packing.into_per_vehicle().into_iter().enumerate() {
        if load.is_empty() {
            continue;
        }
        let positions: Vec<usize> = load.iter().map(|&s| index.stop_position(s)).collect();
        let tour = nearest_neighbor_tour(depot_pos, &positions, index.matrix());
        plan.tours.push((vehicles[k], Tour::new(depot_pos, tour)));
    }

    if !overflow.is_empty() {
        let first = &problem.vehicles()[vehicles[0]];
        let evaluator = RouteEvaluator::new(index, problem.stops(), first);
        let load = plan
            .tours
            .first()
            .map_or(0.0, |(_, tour)| evaluator.load(&tour.stops));
        plan.unserved.push(UnservedDemand::new(
            UnservedDemandKind::Overflow {
                vehicle_id: first.id().to_owned(),
                load,
                capacity: first.capacity(),
            },
            overflow,
        ));
    }
    plan
}

fn set_metrics(
    route: &mut Route,
    problem: &Problem,
    vehicle: &Vehicle,
    tour: &Tour,
) -> Result<(), SolveError> {
    let evaluator = RouteEvaluator::new(problem.distance_index(), problem.stops(), vehicle);
    let metrics = evaluator.metrics(tour.depot, &tour.stops)?;
    route.set_total_distance(metrics.distance);
    route.set_estimated_duration(metrics.duration);
    Ok(())
}

fn tour_stop_ids(problem: &Problem, tour: &Tour) -> Vec<String> {
    let index = problem.distance_index();
    tour.stops
        .iter()
        .map(|&pos| index.id(pos).to_owned())
        .collect()
}

fn stop_ids(stops: &[Stop], indices: &[usize]) -> Vec<String> {
    indices.iter().map(|&s| stops[s].id().to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoPoint;

    fn point(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).expect("valid")
    }

    fn two_depot_problem() -> Problem {
        let depots = vec![
            Depot::new("west", point(0.0, 0.0)),
            Depot::new("east", point(0.0, 10.0)),
        ];
        let stops = vec![
            Stop::new("e1", point(0.5, 9.5), 30.0),
            Stop::new("w1", point(0.5, 0.5), 40.0),
            Stop::new("w2", point(-0.5, 1.0), 40.0),
            Stop::new("e2", point(-0.5, 10.5), 30.0),
            Stop::new("w3", point(1.0, -0.5), 40.0),
        ];
        let vehicles = vec![
            Vehicle::new("tw1", 100.0, 50.0, "west"),
            Vehicle::new("te1", 100.0, 60.0, "east"),
            Vehicle::new("tw2", 100.0, 50.0, "west"),
        ];
        Problem::new(depots, stops, vehicles).expect("valid")
    }

    #[test]
    fn test_routes_per_depot_and_vehicle() {
        let problem = two_depot_problem();
        let solver = MdvrpSolver::new(SolverConfig::default().with_parallel(false));
        let solution = solver.solve_at(&problem, Timestamp::UNIX_EPOCH).expect("solves");

        let summary: Vec<(&str, &str, usize)> = solution
            .routes()
            .iter()
            .map(|r| (r.depot_id(), r.vehicle_id(), r.len()))
            .collect();
        // West: 120 demand over two 100-capacity trucks → 2 + 1.
        assert_eq!(
            summary,
            vec![("west", "tw1", 2), ("west", "tw2", 1), ("east", "te1", 2)]
        );
        assert!(solution.unserved().is_empty());
        assert_eq!(solution.num_served(), 5);
    }

    #[test]
    fn test_route_ids_and_timestamp() {
        let problem = two_depot_problem();
        let created = Timestamp::from_millisecond(1_700_000_000_123).expect("valid");
        let solution = MdvrpSolver::default()
            .solve_at(&problem, created)
            .expect("solves");
        let ids: Vec<&str> = solution.routes().iter().map(|r| r.id()).collect();
        assert_eq!(
            ids,
            vec![
                "route_1_1700000000123",
                "route_2_1700000000123",
                "route_3_1700000000123"
            ]
        );
        assert!(solution.routes().iter().all(|r| r.created() == created));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let problem = two_depot_problem();
        let sequential = MdvrpSolver::new(SolverConfig::default().with_parallel(false))
            .solve_at(&problem, Timestamp::UNIX_EPOCH)
            .expect("solves");
        let parallel = MdvrpSolver::new(SolverConfig::default().with_parallel(true))
            .solve_at(&problem, Timestamp::UNIX_EPOCH)
            .expect("solves");
        assert_eq!(sequential.routes(), parallel.routes());
    }

    #[test]
    fn test_metrics_use_vehicle_speed() {
        let problem = two_depot_problem();
        let solution = MdvrpSolver::default()
            .solve_at(&problem, Timestamp::UNIX_EPOCH)
            .expect("solves");
        let east = solution
            .routes()
            .iter()
            .find(|r| r.vehicle_id() == "te1")
            .expect("east route");
        assert!((east.estimated_duration() - east.total_distance() / 60.0).abs() < 1e-12);
        assert!(east.total_distance() > 0.0);
    }

    #[test]
    fn test_no_vehicle_depot_reported() {
        let depots = vec![Depot::new("w1", point(0.0, 0.0))];
        let stops = vec![
            Stop::new("a", point(0.0, 1.0), 1.0),
            Stop::new("b", point(0.0, 2.0), 1.0),
        ];
        let problem = Problem::new(depots, stops, vec![]).expect("valid");
        let solution = MdvrpSolver::default().solve(&problem).expect("solves");
        assert_eq!(solution.num_routes(), 0);
        assert_eq!(
            solution.unserved(),
            &[UnservedDemand::new(
                UnservedDemandKind::NoVehicle {
                    depot_id: "w1".into()
                },
                vec!["a".into(), "b".into()],
            )]
        );
    }

    #[test]
    fn test_overflow_reported() {
        let depots = vec![Depot::new("w1", point(0.0, 0.0))];
        let stops = vec![
            Stop::new("a", point(0.0, 1.0), 60.0),
            Stop::new("b", point(0.0, 2.0), 60.0),
            Stop::new("c", point(0.0, 3.0), 60.0),
        ];
        let vehicles = vec![Vehicle::new("t1", 100.0, 50.0, "w1")];
        let problem = Problem::new(depots, stops, vehicles).expect("valid");
        let solution = MdvrpSolver::default().solve(&problem).expect("solves");
        assert_eq!(solution.num_routes(), 1);
        assert_eq!(solution.routes()[0].len(), 3);
        assert_eq!(
            solution.unserved()[0].kind,
            UnservedDemandKind::Overflow {
                vehicle_id: "t1".into(),
                load: 180.0,
                capacity: 100.0,
            }
        );
        assert!(solution.dropped_stop_ids().is_empty());
    }

    #[test]
    fn test_no_depots_drops_stops() {
        let stops = vec![Stop::new("a", point(0.0, 1.0), 1.0)];
        let problem = Problem::new(vec![], stops, vec![]).expect("valid");
        let solution = MdvrpSolver::default().solve(&problem).expect("solves");
        assert_eq!(solution.num_routes(), 0);
        assert_eq!(solution.dropped_stop_ids(), vec!["a"]);
    }

    #[test]
    fn test_improvement_disabled() {
        let problem = two_depot_problem();
        let solver = MdvrpSolver::new(SolverConfig::default().with_max_improvement_rounds(0));
        let solution = solver.solve_at(&problem, Timestamp::UNIX_EPOCH).expect("solves");
        assert_eq!(solution.num_routes(), 3);
    }
}
