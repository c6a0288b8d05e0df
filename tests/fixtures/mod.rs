//! Test fixtures for pickup-router.
//!
//! Provides realistic test data including:
//! - Real Seoul locations (landmarks and district offices)
//! - Helpers turning fixture locations into pickup items

pub mod seoul_locations;

pub use seoul_locations::*;
