//! Planner configuration and wiring.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::haversine::{HaversineCalculator, DEFAULT_SPEED_KMH};
use crate::nominatim::{NominatimConfig, NominatimGeocoder};
use crate::optimizer::RouteOptimizer;
use crate::solver::SolveOptions;
use crate::stub_geocoder::StubGeocoder;
use crate::traits::Geocoder;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
    /// Cap on 2-opt passes; unset runs to convergence.
    pub max_two_opt_passes: Option<usize>,
    pub geocoder: GeocoderConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
            max_two_opt_passes: None,
            geocoder: GeocoderConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum GeocoderConfig {
    /// Placeholder coordinates; for demos and tests only.
    Stub {
        #[serde(default)]
        seed: Option<u64>,
    },
    Nominatim(NominatimConfig),
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        GeocoderConfig::Stub { seed: None }
    }
}

impl PlannerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|err| {
            PlannerError::internal("invalid planner configuration")
                .with_hint("check the configuration JSON against the documented fields")
                .with_source(err)
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|err| {
            PlannerError::internal(format!("failed to read configuration {}", path.display()))
                .with_source(err)
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.speed_kmh.is_finite() || self.speed_kmh <= 0.0 {
            return Err(PlannerError::internal(format!(
                "speed_kmh must be a positive number, got {}",
                self.speed_kmh
            )));
        }
        Ok(())
    }

    pub fn solve_options(&self) -> SolveOptions {
        SolveOptions {
            max_two_opt_passes: self.max_two_opt_passes,
        }
    }
}

/// Build an optimizer with the configured backends.
pub fn build_optimizer(
    config: &PlannerConfig,
) -> Result<RouteOptimizer<HaversineCalculator, Box<dyn Geocoder>>> {
    config.validate()?;

    let geocoder: Box<dyn Geocoder> = match &config.geocoder {
        GeocoderConfig::Stub { seed: Some(seed) } => Box::new(StubGeocoder::seeded(*seed)),
        GeocoderConfig::Stub { seed: None } => Box::new(StubGeocoder::new()),
        GeocoderConfig::Nominatim(nominatim) => Box::new(NominatimGeocoder::new(nominatim.clone())?),
    };

    Ok(RouteOptimizer::new(HaversineCalculator::new(config.speed_kmh), geocoder)
        .with_options(config.solve_options()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.speed_kmh, 40.0);
        assert_eq!(config.max_two_opt_passes, None);
        assert_eq!(config.geocoder, GeocoderConfig::Stub { seed: None });
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        assert_eq!(PlannerConfig::from_json_str("{}").unwrap(), PlannerConfig::default());
    }

    #[test]
    fn test_nominatim_backend_from_json() {
        let config = PlannerConfig::from_json_str(
            r#"{
                "speed_kmh": 30,
                "geocoder": { "backend": "nominatim", "base_url": "https://nominatim.example", "country_codes": "kr" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.speed_kmh, 30.0);
        match config.geocoder {
            GeocoderConfig::Nominatim(nominatim) => {
                assert_eq!(nominatim.base_url, "https://nominatim.example");
                assert_eq!(nominatim.country_codes.as_deref(), Some("kr"));
                assert_eq!(nominatim.timeout_secs, 10);
            }
            other => panic!("expected nominatim backend, got {:?}", other),
        }
    }

    #[test]
    fn test_seeded_stub_from_json() {
        let config = PlannerConfig::from_json_str(r#"{ "geocoder": { "backend": "stub", "seed": 42 } }"#).unwrap();
        assert_eq!(config.geocoder, GeocoderConfig::Stub { seed: Some(42) });
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        let err = PlannerConfig::from_json_str(r#"{ "speed_kmh": 0 }"#).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = PlannerConfig::from_json_str("{ speed").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[test]
    fn test_build_optimizer_applies_speed() {
        let config = PlannerConfig {
            speed_kmh: 20.0,
            max_two_opt_passes: Some(3),
            geocoder: GeocoderConfig::Stub { seed: Some(1) },
        };
        let optimizer = build_optimizer(&config).unwrap();
        assert_eq!(optimizer.calculator().speed_kmh, 20.0);
    }
}
