//! Assignment of stops to depots.

mod nearest_depot;

pub use nearest_depot::{assign_to_nearest_depot, DepotAssignment};
