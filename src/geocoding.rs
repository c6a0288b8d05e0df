//! Resolution of free-text locations into coordinates.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{PlannerError, Result};
use crate::models::Location;
use crate::traits::Geocoder;

/// Fills in coordinates for locations through a pluggable [`Geocoder`].
#[derive(Debug, Clone, Default)]
pub struct LocationResolver<G> {
    geocoder: G,
}

impl<G: Geocoder> LocationResolver<G> {
    pub fn new(geocoder: G) -> Self {
        Self { geocoder }
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    /// Resolve one location.
    ///
    /// Already-resolved locations are returned unchanged, but the address
    /// text must not be blank either way.
    pub fn resolve(&self, location: Location) -> Result<Location> {
        let address = location.raw_text.trim();
        if address.is_empty() {
            return Err(PlannerError::invalid_address("address is empty")
                .with_hint("provide a street address or place name"));
        }

        if location.is_resolved() {
            return Ok(location);
        }

        let geocoded = self.geocoder.geocode(address).map_err(|err| {
            warn!(address, error = %err, "geocoding failed");
            PlannerError::geocoding_failed(format!(
                "could not convert address '{}' to coordinates",
                location.raw_text
            ))
            .with_hint("check that the address is complete and correctly spelled")
            .with_source(err)
        })?;

        if !valid_coordinates(geocoded.lat, geocoded.lng) {
            return Err(PlannerError::geocoding_failed(format!(
                "geocoder returned invalid coordinates ({}, {}) for '{}'",
                geocoded.lat, geocoded.lng, location.raw_text
            )));
        }

        debug!(address, lat = geocoded.lat, lng = geocoded.lng, "resolved address");

        let normalized_text = geocoded
            .normalized
            .or_else(|| Some(location.raw_text.clone()));

        Ok(Location {
            normalized_text,
            lat: Some(geocoded.lat),
            lng: Some(geocoded.lng),
            ..location
        })
    }

    /// Resolve many locations in parallel.
    ///
    /// Output order and count match the input. The first failure aborts the
    /// whole batch.
    pub fn resolve_all(&self, locations: Vec<Location>) -> Result<Vec<Location>> {
        locations
            .into_par_iter()
            .map(|location| self.resolve(location))
            .collect()
    }
}

/// Finite and within the WGS84 degree ranges.
pub(crate) fn valid_coordinates(lat: f64, lng: f64) -> bool {
    lat.is_finite() && lng.is_finite() && lat.abs() <= 90.0 && lng.abs() <= 180.0
}
