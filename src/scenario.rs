//! Climate scenarios
//!
//! A closed set of IPCC-style scenarios, each carrying a fixed sea-surface
//! temperature shift relative to present day. Applying a scenario to a
//! temperature reading yields the effective temperature every downstream
//! formula operates on.

use crate::errors::StefError;
use crate::temperature::TemperatureReading;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named climate projection scenario with a fixed temperature shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClimateScenario {
    /// Present-day conditions, no shift.
    Baseline,
    /// SSP1-2.6, +1.5 °C by 2050.
    Ssp126,
    /// SSP5-8.5, +3.2 °C by 2050.
    Ssp585,
}

impl ClimateScenario {
    /// Temperature shift applied on top of the observed reading (°C).
    pub fn temperature_shift(&self) -> f64 {
        match self {
            ClimateScenario::Baseline => 0.0,
            ClimateScenario::Ssp126 => 1.5,
            ClimateScenario::Ssp585 => 3.2,
        }
    }

    /// Human-readable scenario label.
    pub fn label(&self) -> &'static str {
        match self {
            ClimateScenario::Baseline => "Present Day (Baseline)",
            ClimateScenario::Ssp126 => "SSP1-2.6 (+1.5°C by 2050)",
            ClimateScenario::Ssp585 => "SSP5-8.5 (+3.2°C by 2050)",
        }
    }

    /// Effective temperature for a reading under this scenario (°C).
    pub fn apply(&self, reading: &TemperatureReading) -> f64 {
        reading.value_celsius + self.temperature_shift()
    }
}

impl fmt::Display for ClimateScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ClimateScenario {
    type Err = StefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "baseline" | "present day" | "present-day" => Ok(ClimateScenario::Baseline),
            "ssp1-2.6" | "ssp126" => Ok(ClimateScenario::Ssp126),
            "ssp5-8.5" | "ssp585" => Ok(ClimateScenario::Ssp585),
            other => Err(StefError::UnknownScenario(other.to_string())),
        }
    }
}
