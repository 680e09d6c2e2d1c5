//! Route metrics: closed-tour distance, estimated duration and load.

mod evaluator;

pub use evaluator::{route_distance, route_metrics, RouteEvaluator, RouteMetrics};
