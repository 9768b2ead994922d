//! Route planner entry points.

use rayon::prelude::*;
use tracing::{debug, instrument, Level};

use crate::estimator::TimeModel;
use crate::haversine::HaversineMatrix;
use crate::summary::{summarize, RouteResult};
use crate::tour::{nearest_neighbor_order, partition_located};
use crate::traits::{DistanceMatrixProvider, Stop};

/// Order `stops` into a short visiting sequence using great-circle distances
/// and the default 2 min/km + 15 min dwell time model.
///
/// Stops without coordinates are left out of the tour and reported in
/// `RouteResult::unlocated`. The first located stop in input order is
/// always visited first.
pub fn optimize_route<S: Stop>(stops: &[S]) -> RouteResult<'_, S> {
    optimize_route_with(stops, &HaversineMatrix::default(), &TimeModel::default())
}

/// Same as [`optimize_route`] with a caller supplied distance provider and
/// time model.
#[instrument(skip_all, level = Level::DEBUG)]
pub fn optimize_route_with<'a, S, M>(
    stops: &'a [S],
    matrix_provider: &M,
    time_model: &TimeModel,
) -> RouteResult<'a, S>
where
    S: Stop,
    M: DistanceMatrixProvider,
{
    let partition = partition_located(stops);
    debug!(
        input = stops.len(),
        located = partition.located.len(),
        "optimizing route"
    );

    let matrix = matrix_provider.matrix_for(&partition.locations());
    let tour = nearest_neighbor_order(&matrix);

    let mut result = summarize(&partition.located, &tour, &matrix, time_model);
    result.unlocated = partition.unlocated;

    debug!(
        stops = result.len(),
        total_distance_km = result.total_distance,
        total_duration_min = result.total_duration,
        "route optimized"
    );

    result
}

/// Optimize several independent delivery runs in parallel.
///
/// Each run is ordered exactly as [`optimize_route`] would order it; results
/// come back in the same order as `runs`.
pub fn optimize_routes<S>(runs: &[Vec<S>]) -> Vec<RouteResult<'_, S>>
where
    S: Stop + Sync,
    S::Id: Send,
{
    debug!(runs = runs.len(), "optimizing delivery runs");

    runs.par_iter().map(|stops| optimize_route(stops)).collect()
}
