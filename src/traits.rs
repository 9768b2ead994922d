//! Core domain traits for the route planner.
//!
//! These are intentionally minimal. Concrete apps implement them for their
//! own client/delivery records; the planner only needs an id and a location.

use std::hash::Hash;

/// Unique identifier for planner entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// A delivery stop to be ordered.
///
/// Everything beyond `id` and `coordinates` (name, address, phone...) stays
/// on the implementing type and is never inspected by the planner.
pub trait Stop {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Location coordinates (lat, lng) in decimal degrees, if known.
    fn coordinates(&self) -> Option<(f64, f64)>;
}

impl<S: Stop + ?Sized> Stop for &S {
    type Id = S::Id;

    fn id(&self) -> &Self::Id {
        (**self).id()
    }

    fn coordinates(&self) -> Option<(f64, f64)> {
        (**self).coordinates()
    }
}

/// Provides a distance matrix (kilometers) for a set of locations.
///
/// The matrix is indexed by the provided location order.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> Vec<Vec<f64>>;
}
