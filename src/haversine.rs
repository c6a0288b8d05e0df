//! Great-circle distance calculator.
//!
//! Uses straight-line distance on a spherical Earth and an assumed speed to
//! estimate travel time. Less accurate than a road network (ignores roads)
//! but needs no external service.

use crate::traits::DistanceCalculator;

/// Average driving speed assumption for time estimation.
pub const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine-based distance calculator.
#[derive(Debug, Clone)]
pub struct HaversineCalculator {
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
}

impl Default for HaversineCalculator {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl HaversineCalculator {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    /// Calculate haversine distance between two points in kilometers.
    pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

impl DistanceCalculator for HaversineCalculator {
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        Self::haversine_km(from, to) * 1000.0
    }

    fn travel_time(&self, meters: f64) -> f64 {
        meters / 1000.0 / self.speed_kmh * 3600.0
    }
}
