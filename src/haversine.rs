//! Haversine great-circle distances.
//!
//! Straight-line distance over a spherical Earth. Ignores roads, which is
//! all the ordering heuristic needs.

use crate::error::PlannerError;
use crate::traits::DistanceMatrixProvider;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two (lat, lng) points in kilometers.
///
/// Inputs are expected in decimal degrees within the usual ranges. Values
/// outside them are not clamped; the result is finite but meaningless.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    haversine_with_radius(from, to, EARTH_RADIUS_KM)
}

fn haversine_with_radius(from: (f64, f64), to: (f64, f64), radius_km: f64) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` a hair above 1 for antipodal points.
    let c = 2.0 * a.sqrt().min(1.0).asin();

    radius_km * c
}

/// Check that a (lat, lng) pair is finite and within geographic range.
///
/// The planner never calls this itself; callers that accept coordinates from
/// users should validate before optimizing.
pub fn validate_coordinates(location: (f64, f64)) -> Result<(), PlannerError> {
    let (lat, lon) = location;
    let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
    let lon_ok = lon.is_finite() && (-180.0..=180.0).contains(&lon);

    if lat_ok && lon_ok {
        Ok(())
    } else {
        Err(PlannerError::InvalidCoordinates { lat, lon })
    }
}

/// Haversine-based distance matrix provider.
#[derive(Debug, Clone)]
pub struct HaversineMatrix {
    /// Sphere radius used for the Earth, in kilometers.
    pub earth_radius_km: f64,
}

impl Default for HaversineMatrix {
    fn default() -> Self {
        Self {
            earth_radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl HaversineMatrix {
    pub fn new(earth_radius_km: f64) -> Self {
        Self { earth_radius_km }
    }

    /// Distance between two points in kilometers.
    pub fn distance_km(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        haversine_with_radius(from, to, self.earth_radius_km)
    }
}

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> Vec<Vec<f64>> {
        let n = locations.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in i + 1..n {
                let km = self.distance_km(locations[i], locations[j]);
                matrix[i][j] = km;
                matrix[j][i] = km;
            }
        }

        matrix
    }
}
