//! Thermal-metabolic risk assessment engine for marine heat stress.
//!
//! Combines a sea-surface temperature observation, a climate-scenario
//! offset, and an animal's nutritional state into a standardized risk
//! score, metabolic-rate estimate, and multi-decade population-decline
//! projection.
//!
//! # Module Organisation
//!
//! - `temperature`: live/fallback temperature acquisition with a TTL cache
//! - `scenario`: climate scenarios and their fixed temperature shifts
//! - `risk`: lethal threshold, risk-tier ladder, metabolic context
//! - `metabolism`: SMR, Q10, oxygen supply/demand formulas
//! - `thermal`: physiological zone bands, annual temperature cycle
//! - `population`: exponential population-decline projection
//! - `advice`: management recommendations derived from the risk score
//! - `report`: the exported assessment record
//! - `engine`: the facade wiring one assessment end to end
//!
//! # Parameters
//!
//! Each component has an associated parameter struct in the `parameters`
//! module with defaults matching the published calibration; all of them can
//! be overridden via [`config::EngineConfig`] (TOML).
//!
//! # Failure Model
//!
//! No failure in the core is fatal: remote-data problems degrade to a
//! clearly-labelled geographic estimate, and the only errors callers see
//! are invalid inputs at the boundary.

pub mod advice;
pub mod clock;
pub mod config;
pub mod engine;
pub mod errors;
pub mod metabolism;
pub mod parameters;
pub mod population;
pub mod report;
pub mod risk;
pub mod scenario;
pub mod temperature;
pub mod thermal;
pub mod types;

// Re-export the primary entry points for convenience
pub use engine::{AssessmentEngine, AssessmentRequest};
pub use report::AssessmentReport;
