//! Population projection
//!
//! A 25-year relative-population trajectory under sustained conditions:
//! exponential decay whose rate grows linearly with the risk score, plus
//! the first year (if any) the stock drops below the collapse threshold.
//! Deterministic and pure in the risk score.

use crate::parameters::ProjectionParameters;
use serde::{Deserialize, Serialize};

/// One projected year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationPoint {
    pub year: i32,
    /// Population relative to the start year (%).
    pub relative_population_pct: f64,
}

/// Projected population trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationProjection {
    /// One point per projected year, in order.
    pub points: Vec<PopulationPoint>,
    /// First projected year below the collapse threshold, if the crossing
    /// happens within the horizon.
    pub collapse_year: Option<i32>,
    /// Decay rate the trajectory was generated with (1/yr).
    pub decay_rate: f64,
}

/// Projects population decline from a risk score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationProjector {
    parameters: ProjectionParameters,
}

impl PopulationProjector {
    /// Create a projector with default parameters.
    pub fn new() -> Self {
        Self::from_parameters(ProjectionParameters::default())
    }

    /// Create a projector from parameters.
    pub fn from_parameters(parameters: ProjectionParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &ProjectionParameters {
        &self.parameters
    }

    /// Project the relative population over the configured horizon.
    pub fn project(&self, risk_score: u8) -> PopulationProjection {
        let p = &self.parameters;
        let decay_rate = p.base_decay_rate + f64::from(risk_score) / p.risk_divisor;

        let mut points = Vec::with_capacity(p.horizon_years);
        let mut collapse_year = None;

        for offset in 0..p.horizon_years {
            let year = p.start_year + offset as i32;
            let relative_population_pct = 100.0 * (-decay_rate * offset as f64).exp();

            if collapse_year.is_none() && relative_population_pct < p.collapse_threshold_pct {
                collapse_year = Some(year);
            }
            points.push(PopulationPoint {
                year,
                relative_population_pct,
            });
        }

        PopulationProjection {
            points,
            collapse_year,
            decay_rate,
        }
    }
}

impl Default for PopulationProjector {
    fn default() -> Self {
        Self::new()
    }
}
