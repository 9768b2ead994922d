//! Route annotation and totals.

use serde::Serialize;

use crate::estimator::TimeModel;
use crate::traits::Stop;

/// One stop of a computed tour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderedStop<'a, S> {
    pub stop: &'a S,
    /// 1-based position in the tour.
    pub visit_order: usize,
    /// Kilometers from the previous stop; 0 for the first stop.
    pub distance_from_previous: f64,
    /// Minutes to reach and service this stop.
    pub estimated_duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "S: Serialize, S::Id: Serialize"))]
pub struct RouteResult<'a, S: Stop> {
    pub ordered_stops: Vec<OrderedStop<'a, S>>,
    pub total_distance: f64,
    pub total_duration: f64,
    /// Input stops that had no coordinates and were left out of the tour.
    pub unlocated: Vec<S::Id>,
}

impl<'a, S: Stop> RouteResult<'a, S> {
    pub fn empty() -> Self {
        Self {
            ordered_stops: Vec::new(),
            total_distance: 0.0,
            total_duration: 0.0,
            unlocated: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.ordered_stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_stops.is_empty()
    }

    /// Number of stops placed on the route.
    pub fn located_count(&self) -> usize {
        self.ordered_stops.len()
    }

    /// Ids in visiting order.
    pub fn visit_ids(&self) -> Vec<&S::Id> {
        self.ordered_stops.iter().map(|ordered| ordered.stop.id()).collect()
    }
}

/// Annotate a tour and accumulate its totals.
///
/// `tour` indexes into both `located` and `matrix`. Totals are summed from the
/// very values stored on each `OrderedStop`, in tour order.
pub fn summarize<'a, S: Stop>(
    located: &[&'a S],
    tour: &[usize],
    matrix: &[Vec<f64>],
    time_model: &TimeModel,
) -> RouteResult<'a, S> {
    let mut result = RouteResult::empty();
    result.ordered_stops.reserve(tour.len());

    let mut previous: Option<usize> = None;
    for (position, &index) in tour.iter().enumerate() {
        let distance_from_previous = match previous {
            Some(prev) => matrix[prev][index],
            None => 0.0,
        };
        let estimated_duration = time_model.estimate_minutes(distance_from_previous);

        result.total_distance += distance_from_previous;
        result.total_duration += estimated_duration;
        result.ordered_stops.push(OrderedStop {
            stop: located[index],
            visit_order: position + 1,
            distance_from_previous,
            estimated_duration,
        });

        previous = Some(index);
    }

    result
}
