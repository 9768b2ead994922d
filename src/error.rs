//! Errors raised at the planner's boundaries.
//!
//! Ordering itself never fails; these cover decoding requests and the
//! opt-in coordinate validation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("invalid route request JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stop id {0} appears more than once in the request")]
    DuplicateStopId(String),

    #[error("coordinates out of range: lat {lat}, lon {lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },
}
