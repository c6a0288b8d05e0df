//! Capability seams of the planner.
//!
//! Distance estimation, geocoding and input parsing are each hidden behind a
//! trait so that backends (road-network distances, commercial geocoders,
//! other upload formats) can be swapped without touching the search.

use crate::error::{BoxError, Result};
use crate::models::PickupItem;

/// Estimates distance and travel time between two coordinates.
///
/// Coordinates are `(lat, lng)` in degrees.
pub trait DistanceCalculator: Send + Sync {
    /// Distance in meters.
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64;

    /// Travel time in seconds for the given distance in meters.
    fn travel_time(&self, meters: f64) -> f64;
}

impl<T: DistanceCalculator + ?Sized> DistanceCalculator for &T {
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        (**self).distance(from, to)
    }

    fn travel_time(&self, meters: f64) -> f64 {
        (**self).travel_time(meters)
    }
}

impl<T: DistanceCalculator + ?Sized> DistanceCalculator for Box<T> {
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        (**self).distance(from, to)
    }

    fn travel_time(&self, meters: f64) -> f64 {
        (**self).travel_time(meters)
    }
}

/// Result of a successful geocoding lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedAddress {
    pub lat: f64,
    pub lng: f64,
    /// Canonical form of the address, if the backend provides one.
    pub normalized: Option<String>,
}

/// Turns free-text addresses into coordinates.
///
/// Implementations must not keep state between lookups that would make one
/// address depend on another; lookups may run concurrently.
pub trait Geocoder: Send + Sync {
    fn geocode(&self, address: &str) -> std::result::Result<GeocodedAddress, BoxError>;
}

impl<T: Geocoder + ?Sized> Geocoder for &T {
    fn geocode(&self, address: &str) -> std::result::Result<GeocodedAddress, BoxError> {
        (**self).geocode(address)
    }
}

impl<T: Geocoder + ?Sized> Geocoder for Box<T> {
    fn geocode(&self, address: &str) -> std::result::Result<GeocodedAddress, BoxError> {
        (**self).geocode(address)
    }
}

/// Converts an uploaded payload into pickup items.
pub trait InputAdapter {
    fn parse(&self, input: &[u8]) -> Result<Vec<PickupItem>>;
}
