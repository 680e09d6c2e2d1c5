//! Error type for solving.

use thiserror::Error;

/// A fatal condition that aborts a solve.
///
/// Every variant except [`SolveError::NonPositiveSpeed`] is raised while
/// validating input, before any routing work starts.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("{kind} {id} has no location")]
    MissingLocation { kind: &'static str, id: String },

    #[error("{kind} {id} has invalid coordinates ({lat}, {lng})")]
    InvalidCoordinates {
        kind: &'static str,
        id: String,
        lat: f64,
        lng: f64,
    },

    #[error("stop {id} has invalid demand {demand}")]
    InvalidDemand { id: String, demand: f64 },

    #[error("vehicle {id} has invalid capacity {capacity}")]
    InvalidCapacity { id: String, capacity: f64 },

    #[error("vehicle {id} has non-positive speed {speed}")]
    NonPositiveSpeed { id: String, speed: f64 },

    #[error("duplicate id: {0}")]
    DuplicateId(String),

    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request body is not valid UTF-8")]
    InvalidUtf8,
}

impl SolveError {
    /// Returns `true` for errors caused by the shape of the request rather
    /// than by the values it carries.
    pub fn is_malformed_request(&self) -> bool {
        matches!(
            self,
            SolveError::Json(_) | SolveError::MissingField(_) | SolveError::InvalidUtf8
        )
    }
}
