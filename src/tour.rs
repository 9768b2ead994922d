//! Tour construction (nearest-neighbor baseline).

use tracing::debug;

use crate::traits::Stop;

/// Stops split by whether they carry a known location.
#[derive(Debug, Clone)]
pub struct Partition<'a, S: Stop> {
    /// Stops with coordinates, in input order.
    pub located: Vec<&'a S>,
    /// Ids of stops without coordinates, in input order.
    pub unlocated: Vec<S::Id>,
}

impl<'a, S: Stop> Partition<'a, S> {
    pub fn locations(&self) -> Vec<(f64, f64)> {
        self.located
            .iter()
            .filter_map(|stop| stop.coordinates())
            .collect()
    }
}

/// Separate stops that can be routed from those with no known location.
pub fn partition_located<S: Stop>(stops: &[S]) -> Partition<'_, S> {
    let mut located = Vec::with_capacity(stops.len());
    let mut unlocated = Vec::new();

    for stop in stops {
        if stop.coordinates().is_some() {
            located.push(stop);
        } else {
            unlocated.push(stop.id().clone());
        }
    }

    if !unlocated.is_empty() {
        debug!(
            unlocated = unlocated.len(),
            located = located.len(),
            "skipping stops without coordinates"
        );
    }

    Partition { located, unlocated }
}

/// Greedy nearest-neighbor tour over a square distance matrix.
///
/// Starts at index 0 and always moves to the closest unvisited index. Ties go
/// to the lower index, so the result only depends on the matrix and the input
/// order. Returns a permutation of `0..matrix.len()`.
pub fn nearest_neighbor_order(matrix: &[Vec<f64>]) -> Vec<usize> {
    let n = matrix.len();
    if n == 0 {
        return Vec::new();
    }

    let mut tour = Vec::with_capacity(n);
    // Kept sorted ascending so the first strict minimum is the earliest stop.
    let mut unvisited: Vec<usize> = (1..n).collect();
    let mut current = 0;
    tour.push(current);

    while !unvisited.is_empty() {
        let mut best_pos = 0;
        let mut best_distance = matrix[current][unvisited[0]];

        for (pos, &candidate) in unvisited.iter().enumerate().skip(1) {
            let distance = matrix[current][candidate];
            if distance < best_distance {
                best_distance = distance;
                best_pos = pos;
            }
        }

        current = unvisited.remove(best_pos);
        tour.push(current);
    }

    tour
}
