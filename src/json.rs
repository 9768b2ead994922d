//! JSON boundary for callers exposing the planner over HTTP.
//!
//! Request: an array of `{ "id", "lat", "lon", ... }`. Any other field is
//! carried through untouched and echoed back inside each ordered stop.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::PlannerError;
use crate::planner::optimize_route;
use crate::traits::Stop;

/// Stop identifier as sent by clients: either a database integer id or a
/// free-form string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StopId {
    Int(i64),
    Text(String),
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopId::Int(id) => write!(f, "{}", id),
            StopId::Text(id) => write!(f, "{:?}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonStop {
    pub id: StopId,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// Name, address, phone and whatever else the client attached.
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Stop for JsonStop {
    type Id = StopId;

    fn id(&self) -> &StopId {
        &self.id
    }

    fn coordinates(&self) -> Option<(f64, f64)> {
        // Half a coordinate is no location at all.
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// Decode a request body and reject duplicate ids.
pub fn parse_stops(input: &str) -> Result<Vec<JsonStop>, PlannerError> {
    let stops: Vec<JsonStop> = serde_json::from_str(input).map_err(|err| {
        warn!(error = %err, "rejecting malformed route request");
        err
    })?;

    let mut seen = HashSet::with_capacity(stops.len());
    for stop in &stops {
        if !seen.insert(&stop.id) {
            warn!(id = %stop.id, "rejecting route request with duplicate stop id");
            return Err(PlannerError::DuplicateStopId(stop.id.to_string()));
        }
    }

    Ok(stops)
}

/// Decode stops, order them, and encode the resulting route.
pub fn optimize_json(input: &str) -> Result<String, PlannerError> {
    let stops = parse_stops(input)?;
    let result = optimize_route(&stops);
    Ok(serde_json::to_string(&result)?)
}
