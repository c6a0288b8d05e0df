//! Stand-in geocoder for demos and tests.
//!
//! Places every address somewhere inside a small box over central Seoul. The
//! coordinates are NOT derived from the address and must never be used for
//! real dispatching; configure a real backend such as
//! [`NominatimGeocoder`](crate::nominatim::NominatimGeocoder) instead.

use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::BoxError;
use crate::traits::{GeocodedAddress, Geocoder};

const LAT_RANGE: Range<f64> = 37.5..37.6;
const LNG_RANGE: Range<f64> = 127.0..127.1;

#[derive(Debug, Clone, Default)]
pub struct StubGeocoder {
    seed: Option<u64>,
}

impl StubGeocoder {
    /// Random coordinate on every call.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Deterministic coordinate per address text.
    ///
    /// The point depends only on `seed` and the address bytes, so it is the
    /// same across runs, platforms and toolchains.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    fn sample<R: Rng>(rng: &mut R) -> (f64, f64) {
        (rng.gen_range(LAT_RANGE), rng.gen_range(LNG_RANGE))
    }
}

impl Geocoder for StubGeocoder {
    fn geocode(&self, address: &str) -> Result<GeocodedAddress, BoxError> {
        let (lat, lng) = match self.seed {
            Some(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed ^ address_digest(address));
                Self::sample(&mut rng)
            }
            None => Self::sample(&mut rand::thread_rng()),
        };

        Ok(GeocodedAddress {
            lat,
            lng,
            normalized: Some(address.to_string()),
        })
    }
}

// 64-bit FNV-1a.
fn address_digest(address: &str) -> u64 {
    address.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
    })
}
