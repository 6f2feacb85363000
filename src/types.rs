//! Boundary value types
//!
//! Inputs crossing into the engine are validated here, before any formula
//! sees them: coordinates outside their valid ranges are rejected, a
//! nutritional index outside [0, 1] is clamped.

use crate::errors::{StefError, StefResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// A geographic point, created once per query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> StefResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(StefError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(StefError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.2}°{}, {:.2}°{}",
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew
        )
    }
}

/// Normalized feeding status: 0.0 = severe starvation, 1.0 = fully fed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutritionalIndex(f64);

impl NutritionalIndex {
    /// Build a nutritional index, clamping into [0, 1].
    ///
    /// Values a hair outside the range are slider noise rather than caller
    /// bugs, so they are clamped with a warning instead of rejected.
    /// Non-finite input clamps to fully fed.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            warn!(value, "non-finite nutritional index; assuming fully fed");
            return Self(1.0);
        }
        if !(0.0..=1.0).contains(&value) {
            warn!(value, "nutritional index outside [0, 1]; clamping");
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Classify the feeding status into the stress bands used for
    /// starvation warnings.
    pub fn stress(&self) -> NutritionalStress {
        if self.0 < 0.4 {
            NutritionalStress::Severe
        } else if self.0 < 0.7 {
            NutritionalStress::Moderate
        } else {
            NutritionalStress::WellFed
        }
    }
}

/// Nutritional stress bands.
///
/// Below 0.4 the starvation penalty dominates the thermal tolerance budget;
/// between 0.4 and 0.7 the animal is under moderate nutritional stress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionalStress {
    Severe,
    Moderate,
    WellFed,
}
