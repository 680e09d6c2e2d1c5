//! Capacity packing of a depot's stops into its vehicles.

mod first_fit_decreasing;

pub use first_fit_decreasing::{pack_first_fit_decreasing, Packing};
