//! Metabolic formulas
//!
//! Standard metabolic rate, thermal sensitivity, and the oxygen
//! supply/demand budget as functions of effective temperature.
//!
//! # What This Module Does
//!
//! 1. Evaluates the exponential SMR curve $SMR = a \cdot e^{b T}$.
//! 2. Selects the Q10 thermal-sensitivity coefficient, which steps from the
//!    cold regime to the warm regime at the warm-water threshold (boundary
//!    inclusive on the warm side).
//! 3. Computes the oxygen budget: dissolved-oxygen supply falls with
//!    temperature while metabolic demand rises, and the deficit marks the
//!    onset of oxygen-limited thermal tolerance.

use crate::parameters::MetabolismParameters;
use serde::{Deserialize, Serialize};

/// Oxygen supply and demand at a given temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OxygenBudget {
    /// Dissolved-oxygen supply from the water column (mg/L).
    pub supply: f64,
    /// Metabolic oxygen demand (mg kg⁻¹ h⁻¹).
    pub demand: f64,
}

impl OxygenBudget {
    /// Supply minus demand; negative once metabolism outruns the water.
    pub fn surplus(&self) -> f64 {
        self.supply - self.demand
    }

    pub fn is_deficit(&self) -> bool {
        self.surplus() < 0.0
    }
}

impl MetabolismParameters {
    /// Standard metabolic rate at temperature `t` (mg O₂ kg⁻¹ h⁻¹).
    ///
    /// Strictly increasing in `t`.
    pub fn smr(&self, t: f64) -> f64 {
        self.smr_scale * (self.smr_exponent * t).exp()
    }

    /// Thermal-sensitivity coefficient at temperature `t`.
    pub fn q10(&self, t: f64) -> f64 {
        if t >= self.q10_threshold {
            self.q10_warm
        } else {
            self.q10_cold
        }
    }

    /// Oxygen supply/demand budget at temperature `t`.
    pub fn oxygen_budget(&self, t: f64) -> OxygenBudget {
        OxygenBudget {
            supply: self.oxygen_supply_scale * (self.oxygen_supply_exponent * t).exp(),
            demand: self.oxygen_demand_scale * (self.oxygen_demand_exponent * t).exp(),
        }
    }
}
