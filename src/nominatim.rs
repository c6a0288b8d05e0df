//! Nominatim HTTP adapter for geocoding.

use serde::{Deserialize, Serialize};

use crate::error::{BoxError, PlannerError, Result};
use crate::traits::{GeocodedAddress, Geocoder};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NominatimConfig {
    pub base_url: String,
    /// Nominatim's usage policy requires an identifying user agent.
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Comma-separated ISO 3166-1 alpha-2 codes limiting the search, e.g. "kr".
    pub country_codes: Option<String>,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            user_agent: concat!("pickup-router/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 10,
            country_codes: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    config: NominatimConfig,
    client: reqwest::blocking::Client,
}

impl NominatimGeocoder {
    pub fn new(config: NominatimConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| {
                PlannerError::internal("failed to build geocoding HTTP client").with_source(err)
            })?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &NominatimConfig {
        &self.config
    }
}

impl Geocoder for NominatimGeocoder {
    fn geocode(&self, address: &str) -> std::result::Result<GeocodedAddress, BoxError> {
        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));

        let mut query = vec![("q", address), ("format", "jsonv2"), ("limit", "1")];
        if let Some(codes) = self.config.country_codes.as_deref() {
            query.push(("countrycodes", codes));
        }

        let places = self
            .client
            .get(url)
            .query(&query)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<Vec<NominatimPlace>>())?;

        first_match(places, address)
    }
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: Option<String>,
}

fn first_match(
    places: Vec<NominatimPlace>,
    address: &str,
) -> std::result::Result<GeocodedAddress, BoxError> {
    let place = places
        .into_iter()
        .next()
        .ok_or_else(|| format!("no match for address '{}'", address))?;

    Ok(GeocodedAddress {
        lat: place.lat.trim().parse()?,
        lng: place.lon.trim().parse()?,
        normalized: place.display_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Vec<NominatimPlace> {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_first_match_parses_string_coordinates() {
        let places = parse(
            r#"[{"place_id": 1, "lat": "37.5662952", "lon": "126.9779451",
                 "display_name": "서울특별시청, 세종대로, 중구, 서울"}]"#,
        );

        let geocoded = first_match(places, "서울시 중구 세종대로 110").unwrap();
        assert!((geocoded.lat - 37.5662952).abs() < 1e-9);
        assert!((geocoded.lng - 126.9779451).abs() < 1e-9);
        assert_eq!(geocoded.normalized.as_deref(), Some("서울특별시청, 세종대로, 중구, 서울"));
    }

    #[test]
    fn test_empty_result_is_an_error() {
        let err = first_match(parse("[]"), "nowhere street").unwrap_err();
        assert!(err.to_string().contains("nowhere street"));
    }

    #[test]
    fn test_malformed_coordinate_is_an_error() {
        let places = parse(r#"[{"lat": "north", "lon": "126.9"}]"#);
        assert!(first_match(places, "x").is_err());
    }

    #[test]
    fn test_client_builds_from_default_config() {
        let geocoder = NominatimGeocoder::new(NominatimConfig::default()).unwrap();
        assert_eq!(geocoder.config().timeout_secs, 10);
    }
}
