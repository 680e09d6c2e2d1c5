//! Domain model types for multi-depot routing.
//!
//! Provides geographic points, depots, delivery stops with demands, vehicles
//! with capacity and speed, routes as ordered stop sequences, and the
//! solution container that collects routes and unserved-demand diagnostics.

mod depot;
mod location;
mod route;
mod solution;
mod stop;
mod vehicle;

pub use depot::Depot;
pub use location::{haversine_km, GeoPoint, EARTH_RADIUS_KM};
pub use route::Route;
pub use solution::{Solution, UnservedDemand, UnservedDemandKind};
pub use stop::{Stop, TimeWindow};
pub use vehicle::Vehicle;
