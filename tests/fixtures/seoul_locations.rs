//! Real Seoul locations for realistic test fixtures.
//!
//! Coordinates are approximate building entrances taken from OpenStreetMap.

#![allow(dead_code)]

use pickup_router::{Location, PickupItem};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Place {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Place {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn location(&self) -> Location {
        Location::with_coordinates(self.name, self.lat, self.lng)
    }
}

// ============================================================================
// Depots / start locations
// ============================================================================

pub const CITY_HALL: Place = Place::new("서울특별시청", 37.5663, 126.9779);

// ============================================================================
// District offices (gu-cheong), spread across the city
// ============================================================================

pub const DISTRICT_OFFICES: &[Place] = &[
    Place::new("종로구청", 37.5735, 126.9790),
    Place::new("중구청", 37.5638, 126.9976),
    Place::new("용산구청", 37.5324, 126.9905),
    Place::new("성동구청", 37.5634, 127.0369),
    Place::new("광진구청", 37.5385, 127.0823),
    Place::new("동대문구청", 37.5744, 127.0396),
    Place::new("마포구청", 37.5663, 126.9019),
    Place::new("서대문구청", 37.5791, 126.9368),
    Place::new("강남구청", 37.5172, 127.0473),
    Place::new("서초구청", 37.4837, 127.0324),
    Place::new("송파구청", 37.5145, 127.1059),
    Place::new("강동구청", 37.5301, 127.1238),
    Place::new("영등포구청", 37.5264, 126.8962),
    Place::new("관악구청", 37.4784, 126.9516),
    Place::new("노원구청", 37.6542, 127.0568),
];

// ============================================================================
// Landmarks
// ============================================================================

pub const LANDMARKS: &[Place] = &[
    Place::new("강남역", 37.4979, 127.0276),
    Place::new("잠실종합운동장", 37.5152, 127.0730),
    Place::new("여의도공원", 37.5256, 126.9227),
    Place::new("남산서울타워", 37.5512, 126.9882),
    Place::new("경복궁", 37.5796, 126.9770),
];

/// Pickup items with pre-resolved coordinates, ids `stop-0`, `stop-1`, ...
pub fn pickup_items(places: &[Place]) -> Vec<PickupItem> {
    places
        .iter()
        .enumerate()
        .map(|(i, place)| PickupItem::new(format!("stop-{}", i), place.location()))
        .collect()
}

/// Pickup items that still need geocoding.
pub fn unresolved_items(addresses: &[&str]) -> Vec<PickupItem> {
    addresses
        .iter()
        .enumerate()
        .map(|(i, address)| PickupItem::new(format!("stop-{}", i), Location::new(*address)))
        .collect()
}
