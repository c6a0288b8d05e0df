//! End-to-end route optimization for one vehicle.
//!
//! Resolves the origin and every pickup address, builds a distance matrix with
//! the origin at index 0, searches a visiting order and walks it to produce a
//! measured [`Itinerary`].

use chrono::Utc;
use tracing::info;

use crate::error::{PlannerError, Result};
use crate::geocoding::LocationResolver;
use crate::haversine::HaversineCalculator;
use crate::matrix::{build_matrix, measure};
use crate::models::{Itinerary, Location, PickupItem, RouteLeg};
use crate::solver::{solve, SolveOptions};
use crate::stub_geocoder::StubGeocoder;
use crate::traits::{DistanceCalculator, Geocoder};

#[derive(Debug, Clone)]
pub struct RouteOptimizer<D = HaversineCalculator, G = StubGeocoder> {
    calculator: D,
    resolver: LocationResolver<G>,
    options: SolveOptions,
}

impl Default for RouteOptimizer {
    fn default() -> Self {
        Self::new(HaversineCalculator::default(), StubGeocoder::new())
    }
}

impl<D, G> RouteOptimizer<D, G>
where
    D: DistanceCalculator,
    G: Geocoder,
{
    pub fn new(calculator: D, geocoder: G) -> Self {
        Self {
            calculator,
            resolver: LocationResolver::new(geocoder),
            options: SolveOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SolveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn calculator(&self) -> &D {
        &self.calculator
    }

    pub fn resolver(&self) -> &LocationResolver<G> {
        &self.resolver
    }

    /// Plan a closed tour from `origin` through every item.
    ///
    /// Fails without a partial result if any address cannot be resolved.
    pub fn optimize(&self, origin: &str, items: Vec<PickupItem>) -> Result<Itinerary> {
        if items.is_empty() {
            return Err(PlannerError::insufficient_locations("there are no places to visit")
                .with_hint("provide at least one pickup location"));
        }

        let stop_count = items.len();
        let mut locations = Vec::with_capacity(stop_count + 1);
        locations.push(Location::new(origin));
        locations.extend(items.iter().map(|item| item.location.clone()));

        let mut resolved = self.resolver.resolve_all(locations)?;
        let matrix = build_matrix(&self.calculator, &resolved)?;
        let order = solve(&matrix, &self.options)?;

        if order.len() != stop_count {
            return Err(PlannerError::internal(format!(
                "route search visited {} of {} stops",
                order.len(),
                stop_count
            )));
        }

        let origin = resolved.remove(0);
        let mut stops: Vec<Option<PickupItem>> = items
            .into_iter()
            .zip(resolved)
            .map(|(item, location)| Some(PickupItem { location, ..item }))
            .collect();

        let mut legs: Vec<RouteLeg> = Vec::with_capacity(stop_count);
        let mut total_distance = 0.0;
        let mut total_time = 0.0;

        for (position, &index) in order.iter().enumerate() {
            let item = index
                .checked_sub(1)
                .and_then(|slot| stops.get_mut(slot))
                .and_then(Option::take)
                .ok_or_else(|| {
                    PlannerError::internal(format!("stop {} is not a pickup or was visited twice", index))
                })?;

            let previous = legs.last().map_or(&origin, |leg| &leg.item.location);
            let hop = measure(&self.calculator, previous, &item.location)?;
            total_distance += hop.distance;
            total_time += hop.travel_time;

            legs.push(RouteLeg {
                item,
                visit_order: position + 1,
                distance_from_previous: Some(hop.distance),
                travel_time_from_previous: Some(hop.travel_time),
            });
        }

        if let Some(last) = legs.last() {
            let closing = measure(&self.calculator, &last.item.location, &origin)?;
            total_distance += closing.distance;
            total_time += closing.travel_time;
        }

        info!(
            stops = legs.len(),
            total_distance_m = total_distance,
            total_time_s = total_time,
            "route optimized"
        );

        Ok(Itinerary {
            origin,
            legs,
            total_distance,
            total_time,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_empty_items_fail_before_geocoding() {
        let optimizer: RouteOptimizer = RouteOptimizer::default();
        let err = optimizer.optimize("", Vec::new()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InsufficientLocations);
    }

    #[test]
    fn test_blank_origin_is_invalid_address() {
        let items = vec![PickupItem::new("1", Location::new("서울시 강남구 테헤란로 123"))];
        let optimizer: RouteOptimizer = RouteOptimizer::default();
        let err = optimizer.optimize("  ", items).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidAddress);
    }

    #[test]
    fn test_blank_item_address_with_coordinates_is_invalid() {
        let items = vec![PickupItem::new("1", Location::with_coordinates("", 37.5, 127.0))];
        let optimizer = RouteOptimizer::new(HaversineCalculator::default(), StubGeocoder::seeded(1));
        let err = optimizer.optimize("서울시 중구 세종대로 110", items).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidAddress);
    }

    #[test]
    fn test_single_item_round_trip_totals() {
        let optimizer = RouteOptimizer::new(HaversineCalculator::default(), StubGeocoder::seeded(1));
        let items = vec![PickupItem::new(
            "only",
            Location::with_coordinates("강남역", 37.4979, 127.0276),
        )];

        let itinerary = optimizer.optimize("서울시 중구 세종대로 110", items).unwrap();

        assert_eq!(itinerary.legs.len(), 1);
        let leg = &itinerary.legs[0];
        assert_eq!(leg.visit_order, 1);
        let out = leg.distance_from_previous.unwrap();
        assert!((itinerary.total_distance - 2.0 * out).abs() < 1e-6);
        assert!(itinerary.origin.is_resolved());
    }
}
