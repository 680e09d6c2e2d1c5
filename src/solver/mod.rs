//! Multi-depot solver: validated problem, configuration and pipeline.

mod config;
mod mdvrp;
mod problem;

pub use config::SolverConfig;
pub use mdvrp::{solve, MdvrpSolver};
pub use problem::Problem;
