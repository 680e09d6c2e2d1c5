//! Local search for improving tours.
//!
//! - [`two_opt_pass`] / [`two_opt_improve`] — Intra-route 2-opt edge reversal
//! - [`improve_tours`] — 2-opt over many tours under a shared round budget

mod improve;
mod two_opt;

pub use improve::{improve_tours, ImprovementSummary, Tour};
pub use two_opt::{two_opt_improve, two_opt_pass};
