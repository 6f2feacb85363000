//! Population projection parameters

use serde::{Deserialize, Serialize};

/// Parameters for the population-decline projection.
///
/// The projection is a simple exponential decay whose rate grows linearly
/// with the risk score:
///
/// $$P(y) = 100 \cdot e^{-(r_0 + s/d) \cdot (y - y_0)}$$
///
/// where $s$ is the risk score, $r_0$ the baseline decay rate and $d$ the
/// risk divisor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionParameters {
    /// First projected year $y_0$.
    ///
    /// Default: 2026
    pub start_year: i32,

    /// Number of projected years (one point per year).
    ///
    /// Default: 25
    pub horizon_years: usize,

    /// Baseline decay rate $r_0$ (1/yr), applied even at zero risk.
    ///
    /// Default: 0.05
    pub base_decay_rate: f64,

    /// Risk divisor $d$: each risk point adds $1/d$ to the decay rate.
    ///
    /// Default: 500.0
    pub risk_divisor: f64,

    /// Relative population (%) below which the stock is considered
    /// collapsed.
    ///
    /// Default: 50.0 %
    pub collapse_threshold_pct: f64,
}

impl Default for ProjectionParameters {
    fn default() -> Self {
        Self {
            start_year: 2026,
            horizon_years: 25,
            base_decay_rate: 0.05,      // 1/yr
            risk_divisor: 500.0,        // risk points per 1/yr
            collapse_threshold_pct: 50.0,
        }
    }
}
