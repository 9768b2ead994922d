//! Linear travel + dwell time model.

/// Default minutes of travel per kilometer (~30 km/h urban average).
const DEFAULT_MINUTES_PER_KM: f64 = 2.0;

/// Default service time spent at each stop, in minutes.
const DEFAULT_DWELL_MINUTES: f64 = 15.0;

/// Converts the distance driven to reach a stop into minutes spent on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeModel {
    /// Travel minutes per kilometer.
    pub minutes_per_km: f64,
    /// Flat service time per stop in minutes.
    pub dwell_minutes: f64,
}

impl Default for TimeModel {
    fn default() -> Self {
        Self {
            minutes_per_km: DEFAULT_MINUTES_PER_KM,
            dwell_minutes: DEFAULT_DWELL_MINUTES,
        }
    }
}

impl TimeModel {
    pub fn new(minutes_per_km: f64, dwell_minutes: f64) -> Self {
        Self {
            minutes_per_km,
            dwell_minutes,
        }
    }

    /// Build a model from an average driving speed.
    pub fn from_speed_kmh(speed_kmh: f64, dwell_minutes: f64) -> Self {
        Self::new(60.0 / speed_kmh, dwell_minutes)
    }

    /// Minutes to travel `distance_km` and then service the stop.
    pub fn estimate_minutes(&self, distance_km: f64) -> f64 {
        distance_km * self.minutes_per_km + self.dwell_minutes
    }
}
