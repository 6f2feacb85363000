//! Thermal zones and seasonal cycle
//!
//! Coarse physiological zone classification for display alongside the risk
//! tier, and the projected within-year temperature cycle around an
//! effective temperature.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Lower edge of the pejus zone (°C).
const PEJUS_FLOOR: f64 = 20.0;

/// Lower edge of the critical zone (°C).
const CRITICAL_FLOOR: f64 = 25.0;

/// Lower edge of the lethal zone for a well-fed animal (°C).
const LETHAL_FLOOR: f64 = 31.5;

/// Peak-to-mean amplitude of the projected annual cycle (°C).
const ANNUAL_AMPLITUDE: f64 = 5.0;

/// Month (1-12) at which the annual cycle crosses zero going up.
const ANNUAL_ZERO_MONTH: f64 = 5.0;

/// Physiological thermal zones, fixed relative to the well-fed lethal
/// limit. The risk tier, not the zone, accounts for nutritional state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThermalZone {
    /// Below 20 °C: full aerobic scope.
    Optimal,
    /// 20–25 °C: performance declines but remains sustainable.
    Pejus,
    /// 25–31.5 °C: oxygen- and capacity-limited.
    Critical,
    /// At or above 31.5 °C.
    Lethal,
}

impl ThermalZone {
    pub fn classify(t: f64) -> Self {
        if t >= LETHAL_FLOOR {
            ThermalZone::Lethal
        } else if t >= CRITICAL_FLOOR {
            ThermalZone::Critical
        } else if t >= PEJUS_FLOOR {
            ThermalZone::Pejus
        } else {
            ThermalZone::Optimal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThermalZone::Optimal => "Optimal",
            ThermalZone::Pejus => "Pejus",
            ThermalZone::Critical => "Critical",
            ThermalZone::Lethal => "Lethal",
        }
    }
}

/// Projected monthly temperatures (January through December) around an
/// effective temperature: `reference + 5·sin((month − 5)·π/6)`.
///
/// The cycle peaks in August and bottoms out in February.
pub fn annual_cycle(reference: f64) -> [f64; 12] {
    let mut months = [0.0; 12];
    for (index, slot) in months.iter_mut().enumerate() {
        let month = (index + 1) as f64;
        *slot = reference + ANNUAL_AMPLITUDE * ((month - ANNUAL_ZERO_MONTH) * PI / 6.0).sin();
    }
    months
}
