//! JSON payloads and entry points.
//!
//! Request: `{ warehouses, stores, trucks, options? }`.
//! Response: `{ routes }`, or `{ error }` on failure.

mod service;
mod types;

pub use service::{error_body, respond_json, solve_json, solve_request};
pub use types::{
    ErrorResponse, JsonDepot, JsonLocation, JsonRoute, JsonSolveOptions, JsonStop,
    JsonTimeWindow, JsonVehicle, SolveRequest, SolveResponse,
};
