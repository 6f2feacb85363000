//! Geographic fallback model
//!
//! When no live observation is available (or wanted), sea-surface
//! temperature is estimated from latitude and calendar month alone: a
//! cosine profile from equator to pole plus a sinusoidal seasonal term,
//! bounded to the range the species actually encounters.

use crate::types::Coordinate;
use std::f64::consts::PI;

/// Equator-to-pole amplitude of the latitudinal profile (°C).
const LATITUDE_AMPLITUDE: f64 = 28.0;

/// Polar baseline offset (°C).
const POLAR_OFFSET: f64 = 5.0;

/// Peak-to-mean amplitude of the seasonal term (°C).
const SEASONAL_AMPLITUDE: f64 = 3.0;

/// Month (1-12) at which the seasonal term crosses zero going up.
const SEASONAL_ZERO_MONTH: f64 = 3.0;

/// Coldest plausible sea-surface temperature (°C).
const MIN_SST: f64 = 10.0;

/// Warmest plausible sea-surface temperature (°C).
const MAX_SST: f64 = 36.0;

/// Estimate sea-surface temperature for a coordinate in a given calendar
/// month (1-12), in °C rounded to one decimal.
///
/// Deterministic: the same coordinate and month always produce the same
/// estimate.
pub fn geographic_estimate(coord: Coordinate, month: u32) -> f64 {
    let base = LATITUDE_AMPLITUDE * coord.latitude().abs().to_radians().cos() + POLAR_OFFSET;
    let seasonal = SEASONAL_AMPLITUDE * ((month as f64 - SEASONAL_ZERO_MONTH) * PI / 6.0).sin();

    round_to_tenth((base + seasonal).clamp(MIN_SST, MAX_SST))
}

/// Round a temperature to one decimal place, the resolution every reading
/// is reported at.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
