//! JSON request/response entry points.

use jiff::Timestamp;
use tracing::{error, info};

use super::types::{ErrorResponse, JsonRoute, SolveRequest, SolveResponse};
use crate::error::SolveError;
use crate::solver::{MdvrpSolver, SolverConfig};

/// Solves a parsed request, stamping routes with `created`.
pub fn solve_request(
    request: SolveRequest,
    base: SolverConfig,
    created: Timestamp,
) -> Result<SolveResponse, SolveError> {
    let (problem, config) = request.into_problem(base)?;
    info!(
        warehouses = problem.depots().len(),
        stores = problem.stops().len(),
        trucks = problem.vehicles().len(),
        "Solve request received"
    );
    let solution = MdvrpSolver::new(config).solve_at(&problem, created)?;
    Ok(SolveResponse {
        routes: solution.routes().iter().map(JsonRoute::from).collect(),
    })
}

/// Solves a JSON request body and returns the JSON response body.
///
/// # Examples
///
/// ```
/// let body = r#"{
///     "warehouses": [{"id": "w1", "location": {"lat": 0.0, "lng": 0.0}}],
///     "stores": [{"id": "s1", "location": {"lat": 0.0, "lng": 1.0}, "demand": 5}],
///     "trucks": [{"id": "t1", "capacity": 10, "speed": 50, "warehouseId": "w1"}]
/// }"#;
/// let response = u_mdvrp::json::solve_json(body).unwrap();
/// let value: serde_json::Value = serde_json::from_str(&response).unwrap();
/// assert_eq!(value["routes"][0]["stores"][0], "s1");
/// assert_eq!(value["routes"][0]["distance"], 222.39);
/// ```
pub fn solve_json(body: &str) -> Result<String, SolveError> {
    let request: SolveRequest = serde_json::from_str(body)?;
    let response = solve_request(request, SolverConfig::default(), Timestamp::now())?;
    Ok(serde_json::to_string(&response)?)
}

/// HTTP-style wrapper around [`solve_json`]: returns a status code and a
/// body that is either a [`SolveResponse`] or an [`ErrorResponse`].
///
/// Malformed payloads map to 400, invalid values to 422.
pub fn respond_json(body: &str) -> (u16, String) {
    match solve_json(body) {
        Ok(response) => (200, response),
        Err(err) => {
            error!(%err, "Solve request failed");
            let status = if err.is_malformed_request() { 400 } else { 422 };
            (status, error_body(&err))
        }
    }
}

/// Serializes `err` as an [`ErrorResponse`] body.
pub fn error_body(err: &SolveError) -> String {
    serde_json::to_string(&ErrorResponse::from(err))
        .unwrap_or_else(|_| String::from(r#"{"error":"internal error"}"#))
}
