//! Solver configuration.
//!
//! [`SolverConfig`] holds the parameters that control a solve.

/// Configuration for [`MdvrpSolver`](super::MdvrpSolver).
///
/// # Defaults
///
/// ```
/// use u_mdvrp::solver::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.max_improvement_rounds, 100);
/// assert_eq!(config.min_stops_for_improvement, 4);
/// assert!(config.parallel);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_mdvrp::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_max_improvement_rounds(20)
///     .with_parallel(false);
/// assert_eq!(config.max_improvement_rounds, 20);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Maximum number of 2-opt rounds across all routes.
    ///
    /// Each round gives every route that has not yet reached a local optimum
    /// one full pass. Set to 0 to skip improvement.
    pub max_improvement_rounds: usize,

    /// Routes with fewer stops than this are not improved.
    pub min_stops_for_improvement: usize,

    /// Whether to pack and construct depots in parallel using rayon.
    ///
    /// Output is identical either way.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_improvement_rounds: 100,
            min_stops_for_improvement: 4,
            parallel: true,
        }
    }
}

impl SolverConfig {
    /// Sets the 2-opt round budget.
    pub fn with_max_improvement_rounds(mut self, n: usize) -> Self {
        self.max_improvement_rounds = n;
        self
    }

    /// Sets the minimum route length for 2-opt.
    pub fn with_min_stops_for_improvement(mut self, n: usize) -> Self {
        self.min_stops_for_improvement = n;
        self
    }

    /// Enables or disables per-depot parallelism.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
