//! Metabolic parameters
//!
//! Calibration constants for standard metabolic rate, thermal sensitivity,
//! and the oxygen supply/demand budget.

use serde::{Deserialize, Serialize};

/// Parameters for the metabolic-rate and oxygen-budget formulas.
///
/// # Standard Metabolic Rate
///
/// SMR follows an exponential thermal performance curve:
///
/// $$SMR = a \cdot e^{b \cdot T}$$
///
/// with $a$ in mg O₂ kg⁻¹ h⁻¹ and $b$ per °C.
///
/// # Thermal Sensitivity
///
/// Q10 is a step function of temperature: the metabolic machinery shifts to
/// a steeper regime at the warm-water threshold.
///
/// # Oxygen Budget
///
/// Dissolved-oxygen supply falls with temperature while metabolic demand
/// rises, both exponentially. The budget deficit marks the onset of
/// oxygen- and capacity-limited thermal tolerance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetabolismParameters {
    /// SMR scale factor $a$ (mg O₂ kg⁻¹ h⁻¹).
    ///
    /// Default: 72.4
    pub smr_scale: f64,

    /// SMR exponent $b$ (1/°C).
    ///
    /// Default: 0.0567
    pub smr_exponent: f64,

    /// Q10 below the warm-water threshold.
    ///
    /// Default: 2.07
    pub q10_cold: f64,

    /// Q10 at and above the warm-water threshold.
    ///
    /// Default: 2.45
    pub q10_warm: f64,

    /// Warm-water threshold (°C) where Q10 steps up. The boundary is
    /// inclusive on the warm side.
    ///
    /// Default: 25.0 °C
    pub q10_threshold: f64,

    /// Oxygen supply scale (mg/L at 0 °C).
    ///
    /// Default: 14.0
    pub oxygen_supply_scale: f64,

    /// Oxygen supply exponent (1/°C). Negative: warmer water holds less
    /// dissolved oxygen.
    ///
    /// Default: -0.02
    pub oxygen_supply_exponent: f64,

    /// Oxygen demand scale (mg kg⁻¹ h⁻¹ at 0 °C).
    ///
    /// Default: 2.0
    pub oxygen_demand_scale: f64,

    /// Oxygen demand exponent (1/°C).
    ///
    /// Default: 0.09
    pub oxygen_demand_exponent: f64,
}

impl Default for MetabolismParameters {
    fn default() -> Self {
        Self {
            smr_scale: 72.4,     // mg O2/kg/h
            smr_exponent: 0.0567, // 1/degC
            q10_cold: 2.07,
            q10_warm: 2.45,
            q10_threshold: 25.0, // degC

            oxygen_supply_scale: 14.0,
            oxygen_supply_exponent: -0.02, // warmer water holds less O2
            oxygen_demand_scale: 2.0,
            oxygen_demand_exponent: 0.09,
        }
    }
}
