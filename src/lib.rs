//! pickup-router core
//!
//! Orders a list of pickup addresses into a single-vehicle tour from an
//! origin, minimizing straight-line travel distance.

pub mod adapter;
pub mod config;
pub mod error;
pub mod geocoding;
pub mod haversine;
pub mod matrix;
pub mod models;
pub mod nominatim;
pub mod optimizer;
pub mod solver;
pub mod stub_geocoder;
pub mod traits;

pub use error::{ErrorBody, ErrorCode, PlannerError, Result};
pub use models::{Attributes, Itinerary, Location, PickupItem, RouteLeg};
pub use optimizer::RouteOptimizer;
