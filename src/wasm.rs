//! WebAssembly bindings for browser and edge-function callers.

use jiff::Timestamp;
use wasm_bindgen::prelude::*;

use crate::error::SolveError;
use crate::json::{solve_request, ErrorResponse, SolveRequest};
use crate::solver::SolverConfig;

fn to_js_error(err: &SolveError) -> JsValue {
    serde_wasm_bindgen::to_value(&ErrorResponse::from(err))
        .unwrap_or_else(|_| JsValue::from_str(&err.to_string()))
}

/// Solves a request object `{ warehouses, stores, trucks }` and resolves to
/// `{ routes }`; rejects with `{ error }`.
///
/// Runs single-threaded; routes are stamped with the JS clock.
#[wasm_bindgen(js_name = solveMdvrp)]
pub fn solve_mdvrp(request: JsValue) -> Result<JsValue, JsValue> {
    let request: SolveRequest = serde_wasm_bindgen::from_value(request)?;
    let created = Timestamp::from_millisecond(js_sys::Date::now() as i64)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let base = SolverConfig::default().with_parallel(false);
    let response = solve_request(request, base, created).map_err(|e| to_js_error(&e))?;
    Ok(serde_wasm_bindgen::to_value(&response)?)
}
