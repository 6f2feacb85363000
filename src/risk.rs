//! Risk assessment
//!
//! The lethal-threshold and risk-scoring ladder.
//!
//! # What This Module Does
//!
//! 1. Derives the lethal threshold from the nutritional index: starvation
//!    narrows the thermal safety range by up to the full penalty at NI = 0.
//! 2. Classifies the effective temperature into one of four contiguous
//!    tiers and maps it piecewise-linearly onto a 0–100 score. The ladder
//!    is evaluated strictly top-down; the first matching tier wins.
//! 3. Attaches the metabolic context: SMR, Q10, oxygen budget, thermal
//!    zone, and the safety margin to the threshold.
//!
//! # Tier Ladder
//!
//! For threshold $T_c$ and critical-band width $w$:
//!
//! | Tier      | Condition            | Score                                  |
//! |-----------|----------------------|----------------------------------------|
//! | LETHAL    | $T \ge T_c$          | 100                                    |
//! | CRITICAL  | $T \ge T_c - w$      | $75 + (T - (T_c - w)) / w \cdot 25$    |
//! | HIGH RISK | $T \ge 25$           | $50 + (T - 25)/(T_c - w - 25) \cdot 25$|
//! | STABLE    | otherwise            | $T / 25 \cdot 50$                      |
//!
//! The HIGH RISK denominator is the width of the band between the
//! warm-water floor and the critical band. For any nutritional index in
//! [0, 1] that width stays positive; the scorer still guards the
//! degenerate case explicitly rather than dividing blindly.

use crate::metabolism::OxygenBudget;
use crate::parameters::{MetabolismParameters, RiskParameters};
use crate::thermal::ThermalZone;
use crate::types::NutritionalIndex;
use serde::{Deserialize, Serialize};

/// Risk tiers, ordered from benign to lethal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Stable,
    HighRisk,
    Critical,
    Lethal,
}

impl RiskTier {
    /// Status label as exported in reports.
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Stable => "STABLE",
            RiskTier::HighRisk => "HIGH RISK",
            RiskTier::Critical => "CRITICAL",
            RiskTier::Lethal => "LETHAL",
        }
    }
}

/// Complete risk assessment for one (temperature, nutrition) input.
///
/// Derived and immutable; recomputed fresh on every query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Scenario-adjusted temperature the assessment was made at (°C).
    pub effective_temperature: f64,
    /// Standard metabolic rate (mg O₂ kg⁻¹ h⁻¹).
    pub smr: f64,
    /// Thermal-sensitivity coefficient.
    pub q10: f64,
    /// Nutrition-adjusted lethal threshold (°C).
    pub lethal_threshold: f64,
    /// Risk score in [0, 100].
    pub risk_score: u8,
    /// Tier implied by the score ladder.
    pub risk_tier: RiskTier,
    /// Degrees remaining before the lethal threshold; negative once past it.
    pub safety_margin: f64,
    /// Oxygen supply/demand at the effective temperature.
    pub oxygen: OxygenBudget,
    /// Physiological zone of the effective temperature.
    pub thermal_zone: ThermalZone,
}

/// Computes lethal thresholds, risk tiers, and metabolic context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskEngine {
    parameters: RiskParameters,
    metabolism: MetabolismParameters,
}

impl RiskEngine {
    /// Create a risk engine with default calibration.
    pub fn new() -> Self {
        Self::from_parameters(RiskParameters::default(), MetabolismParameters::default())
    }

    /// Create a risk engine from parameters.
    pub fn from_parameters(parameters: RiskParameters, metabolism: MetabolismParameters) -> Self {
        Self {
            parameters,
            metabolism,
        }
    }

    pub fn parameters(&self) -> &RiskParameters {
        &self.parameters
    }

    /// Nutrition-adjusted lethal threshold (°C).
    ///
    /// Depends only on the nutritional index, never on temperature.
    pub fn lethal_threshold(&self, ni: NutritionalIndex) -> f64 {
        self.parameters.base_lethal_limit
            - self.parameters.starvation_penalty * (1.0 - ni.value())
    }

    /// Assess an effective temperature for an animal in the given
    /// nutritional state.
    ///
    /// Total for finite input: every branch returns a score in [0, 100].
    pub fn evaluate(&self, effective_temperature: f64, ni: NutritionalIndex) -> RiskAssessment {
        let lethal_threshold = self.lethal_threshold(ni);
        let (risk_tier, risk_score) = self.classify(effective_temperature, lethal_threshold);

        RiskAssessment {
            effective_temperature,
            smr: self.metabolism.smr(effective_temperature),
            q10: self.metabolism.q10(effective_temperature),
            lethal_threshold,
            risk_score,
            risk_tier,
            safety_margin: lethal_threshold - effective_temperature,
            oxygen: self.metabolism.oxygen_budget(effective_temperature),
            thermal_zone: ThermalZone::classify(effective_temperature),
        }
    }

    /// Walk the tier ladder top-down; the first matching tier wins.
    fn classify(&self, t: f64, lethal_threshold: f64) -> (RiskTier, u8) {
        let critical_floor = lethal_threshold - self.parameters.critical_band;

        if t >= lethal_threshold {
            (RiskTier::Lethal, 100)
        } else if t >= critical_floor {
            (RiskTier::Critical, clamp_score(self.critical_score(t, critical_floor)))
        } else if t >= self.parameters.high_risk_floor {
            self.high_risk_score(t, critical_floor)
        } else {
            let raw = t / self.parameters.high_risk_floor * 50.0;
            (RiskTier::Stable, clamp_score(raw))
        }
    }

    /// Score within the critical band: 75 at the band floor, approaching
    /// 100 at the lethal threshold.
    fn critical_score(&self, t: f64, critical_floor: f64) -> f64 {
        75.0 + (t - critical_floor) / self.parameters.critical_band * 25.0
    }

    /// Score within the high-risk band: 50 at the warm-water floor,
    /// approaching 75 at the critical band.
    ///
    /// Guarded: if the lethal threshold were depressed until the critical
    /// band swallowed the high-risk band, the band width would be
    /// non-positive and the linear map undefined. That input is scored with
    /// the critical formula instead of dividing by the degenerate width.
    fn high_risk_score(&self, t: f64, critical_floor: f64) -> (RiskTier, u8) {
        let band_width = critical_floor - self.parameters.high_risk_floor;
        if band_width <= 0.0 {
            return (
                RiskTier::Critical,
                clamp_score(self.critical_score(t, critical_floor)),
            );
        }

        let raw = 50.0 + (t - self.parameters.high_risk_floor) / band_width * 25.0;
        (RiskTier::HighRisk, clamp_score(raw))
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Round a raw score and clamp it into [0, 100].
fn clamp_score(raw: f64) -> u8 {
    (raw.round() as i64).clamp(0, 100) as u8
}
