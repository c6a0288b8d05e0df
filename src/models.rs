//! Value types flowing through the planner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque passthrough metadata attached to a pickup item.
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// A place as the user typed it, optionally resolved to coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub raw_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl Location {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            normalized_text: None,
            lat: None,
            lng: None,
        }
    }

    /// A location that already carries coordinates.
    pub fn with_coordinates(raw_text: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            raw_text: raw_text.into(),
            normalized_text: None,
            lat: Some(lat),
            lng: Some(lng),
        }
    }

    /// Coordinates (lat, lng) when both are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.coordinates().is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupItem {
    pub id: String,
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

impl PickupItem {
    pub fn new(id: impl Into<String>, location: Location) -> Self {
        Self {
            id: id.into(),
            location,
            attributes: None,
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }
}

/// One stop of an itinerary, measured from the stop before it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLeg {
    pub item: PickupItem,
    /// 1-based position in the visiting order.
    pub visit_order: usize,
    /// Meters from the previous stop (the origin for the first leg).
    pub distance_from_previous: Option<f64>,
    /// Seconds from the previous stop.
    pub travel_time_from_previous: Option<f64>,
}

/// Ordered visiting plan for a single vehicle.
///
/// Totals include the closing run from the last stop back to the origin;
/// the legs themselves do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub origin: Location,
    pub legs: Vec<RouteLeg>,
    /// Meters.
    pub total_distance: f64,
    /// Seconds.
    pub total_time: f64,
    pub created_at: DateTime<Utc>,
}

impl Itinerary {
    pub fn item_ids(&self) -> Vec<&str> {
        self.legs.iter().map(|leg| leg.item.id.as_str()).collect()
    }
}
