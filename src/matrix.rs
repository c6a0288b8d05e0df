//! Distance matrix construction over resolved locations.

use crate::error::{PlannerError, Result};
use crate::models::Location;
use crate::traits::DistanceCalculator;

/// Distance and travel time between two stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Meters.
    pub distance: f64,
    /// Seconds.
    pub travel_time: f64,
}

/// Measure the hop between two locations.
///
/// Both locations must be resolved.
pub fn measure<D>(calculator: &D, from: &Location, to: &Location) -> Result<Measurement>
where
    D: DistanceCalculator + ?Sized,
{
    let (from_coords, to_coords) = match (from.coordinates(), to.coordinates()) {
        (Some(from_coords), Some(to_coords)) => (from_coords, to_coords),
        _ => {
            let missing = if from.is_resolved() { to } else { from };
            return Err(unresolved(missing));
        }
    };

    let distance = calculator.distance(from_coords, to_coords);
    Ok(Measurement {
        distance,
        travel_time: calculator.travel_time(distance),
    })
}

/// Build a dense all-pairs distance matrix in meters.
///
/// `matrix[i][j]` is the distance from `locations[i]` to `locations[j]`; the
/// diagonal is zero.
pub fn build_matrix<D>(calculator: &D, locations: &[Location]) -> Result<Vec<Vec<f64>>>
where
    D: DistanceCalculator + ?Sized,
{
    let n = locations.len();
    let mut matrix = vec![vec![0.0; n]; n];

    for (i, from) in locations.iter().enumerate() {
        for (j, to) in locations.iter().enumerate() {
            if i != j {
                matrix[i][j] = measure(calculator, from, to)?.distance;
            } else if !from.is_resolved() {
                return Err(unresolved(from));
            }
        }
    }

    Ok(matrix)
}

fn unresolved(location: &Location) -> PlannerError {
    PlannerError::distance_calculation_failed(format!(
        "location '{}' has no coordinates",
        location.raw_text
    ))
    .with_hint("geocode every address before computing distances")
}
