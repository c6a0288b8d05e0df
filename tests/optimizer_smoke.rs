use std::collections::HashMap;

use pickup_router::error::BoxError;
use pickup_router::haversine::HaversineCalculator;
use pickup_router::traits::{DistanceCalculator, GeocodedAddress, Geocoder};
use pickup_router::{Location, PickupItem, RouteOptimizer};

/// Geocoder backed by a fixed address book.
struct AddressBook(HashMap<&'static str, (f64, f64)>);

impl Geocoder for AddressBook {
    fn geocode(&self, address: &str) -> Result<GeocodedAddress, BoxError> {
        let (lat, lng) = self
            .0
            .get(address)
            .copied()
            .ok_or_else(|| format!("unknown address '{}'", address))?;
        Ok(GeocodedAddress { lat, lng, normalized: None })
    }
}

fn closed_loop(calculator: &HaversineCalculator, origin: (f64, f64), stops: &[(f64, f64)]) -> f64 {
    let mut total = 0.0;
    let mut previous = origin;
    for &stop in stops {
        total += calculator.distance(previous, stop);
        previous = stop;
    }
    total + calculator.distance(previous, origin)
}

#[test]
fn optimizes_three_stop_example() {
    let origin = (37.5663, 126.9779);
    let stops = [(37.50, 127.02), (37.55, 126.98), (37.49, 127.05)];

    let book = AddressBook(HashMap::from([("서울시 중구 세종대로 110", origin)]));
    let optimizer = RouteOptimizer::new(HaversineCalculator::default(), book);

    let items: Vec<PickupItem> = stops
        .iter()
        .enumerate()
        .map(|(i, &(lat, lng))| PickupItem::new((i + 1).to_string(), Location::with_coordinates(format!("stop {}", i + 1), lat, lng)))
        .collect();

    let itinerary = optimizer
        .optimize("서울시 중구 세종대로 110", items)
        .expect("optimize should succeed");

    assert_eq!(itinerary.legs.len(), 3);
    let orders: Vec<usize> = itinerary.legs.iter().map(|leg| leg.visit_order).collect();
    assert_eq!(orders, vec![1, 2, 3]);
    assert!(itinerary.total_distance > 0.0);
    assert!(itinerary.total_time > 0.0);
    assert_eq!(itinerary.origin.coordinates(), Some(origin));

    let calculator = HaversineCalculator::default();
    let visited: Vec<(f64, f64)> = itinerary
        .legs
        .iter()
        .map(|leg| leg.item.location.coordinates().unwrap())
        .collect();
    let identity = closed_loop(&calculator, origin, &stops);
    assert!(
        itinerary.total_distance <= identity + 1e-6,
        "optimized {} should not exceed input order {}",
        itinerary.total_distance,
        identity
    );
    assert!((closed_loop(&calculator, origin, &visited) - itinerary.total_distance).abs() < 1e-6);
}
