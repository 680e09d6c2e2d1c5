//! # u-mdvrp
//!
//! Multi-depot vehicle routing: assigns delivery stops to their nearest
//! depot, packs each depot's stops into its trucks under capacity, orders
//! every truck's stops by nearest neighbor and shortens the tours with 2-opt.
//! Distances are great-circle (haversine) kilometres.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (GeoPoint, Depot, Stop, Vehicle, Route, Solution)
//! - [`distance`] — Distance matrix and id-keyed distance index
//! - [`assignment`] — Nearest-depot assignment
//! - [`packing`] — First-fit-decreasing capacity packing
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`local_search`] — 2-opt improvement
//! - [`evaluation`] — Route distance, duration and load
//! - [`solver`] — Validated problem, configuration and the solve pipeline
//! - [`json`] — Request/response payloads
//!
//! ## Example
//!
//! ```
//! use u_mdvrp::models::{Depot, GeoPoint, Stop, Vehicle};
//! use u_mdvrp::solver::solve;
//!
//! let depots = vec![Depot::new("w1", GeoPoint::new(0.0, 0.0).unwrap())];
//! let stops = vec![
//!     Stop::new("s1", GeoPoint::new(0.0, 1.0).unwrap(), 10.0),
//!     Stop::new("s2", GeoPoint::new(0.0, 2.0).unwrap(), 10.0),
//! ];
//! let vehicles = vec![Vehicle::new("t1", 100.0, 50.0, "w1")];
//!
//! let solution = solve(depots, stops, vehicles).unwrap();
//! assert_eq!(solution.num_routes(), 1);
//! assert_eq!(solution.num_served(), 2);
//! ```

pub mod assignment;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod json;
pub mod local_search;
pub mod models;
pub mod packing;
pub mod solver;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::SolveError;
