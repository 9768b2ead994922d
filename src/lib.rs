//! delivery-route-planner core
//!
//! Orders delivery stops into a short visiting sequence and annotates each
//! stop with distance and time estimates.

pub mod traits;
pub mod error;
pub mod haversine;
pub mod tour;
pub mod estimator;
pub mod summary;
pub mod planner;
pub mod json;

pub use error::PlannerError;
pub use estimator::TimeModel;
pub use haversine::{haversine_km, HaversineMatrix};
pub use planner::{optimize_route, optimize_route_with, optimize_routes};
pub use summary::{OrderedStop, RouteResult};
pub use traits::{DistanceMatrixProvider, Stop};
