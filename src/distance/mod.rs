//! Great-circle distance lookup.
//!
//! Provides a dense distance matrix and an id-keyed index over all depots
//! and stops of a problem.

mod index;
mod matrix;

pub use index::DistanceIndex;
pub use matrix::DistanceMatrix;
