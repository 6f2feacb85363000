//! Risk scoring parameters
//!
//! Calibration constants for the lethal threshold and the risk-tier ladder.

use serde::{Deserialize, Serialize};

/// Parameters for lethal-threshold and risk-score calculation.
///
/// # Lethal Threshold
///
/// Starvation narrows the thermal safety range:
///
/// $$T_{lethal} = T_{base} - p \cdot (1 - NI)$$
///
/// where $p$ is the maximum starvation penalty, reached at $NI = 0$.
///
/// # Risk Ladder
///
/// The temperature domain is split into four contiguous tiers below the
/// lethal threshold: a critical band directly under it, a high-risk band
/// from the warm-water floor up to the critical band, and a stable region
/// below that. Scores are mapped piecewise-linearly onto [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskParameters {
    /// Lethal temperature for a fully fed animal (°C).
    ///
    /// Default: 31.5 °C
    pub base_lethal_limit: f64,

    /// Maximum starvation penalty on the lethal limit (°C), applied in full
    /// at a nutritional index of zero.
    ///
    /// Default: 1.07 °C
    pub starvation_penalty: f64,

    /// Width of the critical band directly below the lethal threshold (°C).
    ///
    /// Default: 2.0 °C
    pub critical_band: f64,

    /// Lower edge of the high-risk band (°C). Also the reference span for
    /// the stable-tier score.
    ///
    /// Default: 25.0 °C
    pub high_risk_floor: f64,
}

impl Default for RiskParameters {
    fn default() -> Self {
        Self {
            base_lethal_limit: 31.5, // degC, well-fed Mugil cephalus
            starvation_penalty: 1.07, // degC at NI = 0
            critical_band: 2.0,      // degC
            high_risk_floor: 25.0,   // degC
        }
    }
}
