//! Assessment engine
//!
//! The facade wiring the pipeline together: temperature resolution →
//! scenario adjustment → risk evaluation → population projection → report
//! assembly. One synchronous call per assessment; the only side effect is
//! the provider's single optional network request.

use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::errors::StefResult;
use crate::population::PopulationProjector;
use crate::report::{AssessmentReport, ReportAssembler};
use crate::risk::RiskEngine;
use crate::scenario::ClimateScenario;
use crate::temperature::TemperatureProvider;
use crate::types::{Coordinate, NutritionalIndex};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One assessment request as supplied by the UI boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub scenario: ClimateScenario,
    pub nutritional_index: f64,
    pub use_live_data: bool,
}

/// The complete thermal-metabolic risk assessment pipeline.
#[derive(Debug)]
pub struct AssessmentEngine {
    provider: TemperatureProvider,
    risk: RiskEngine,
    projector: PopulationProjector,
    assembler: ReportAssembler,
}

impl AssessmentEngine {
    /// Build an engine with default configuration and the system clock.
    pub fn new() -> StefResult<Self> {
        Self::from_config(EngineConfig::default())
    }

    /// Build an engine from a configuration.
    pub fn from_config(config: EngineConfig) -> StefResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Build an engine with an injected clock. Every time the engine reads
    /// (cache expiry, the fallback's seasonal term, report timestamps)
    /// comes from this clock.
    pub fn with_clock(config: EngineConfig, clock: Arc<dyn Clock>) -> StefResult<Self> {
        Ok(Self {
            provider: TemperatureProvider::with_clock(config.provider, clock.clone())?,
            risk: RiskEngine::from_parameters(config.risk, config.metabolism),
            projector: PopulationProjector::from_parameters(config.projection),
            assembler: ReportAssembler::new(clock),
        })
    }

    /// Run one assessment.
    ///
    /// Fails only on invalid coordinates; everything past input validation
    /// degrades to a clearly-labelled model estimate instead of erroring.
    pub fn assess(&mut self, request: &AssessmentRequest) -> StefResult<AssessmentReport> {
        let coordinate = Coordinate::new(request.latitude, request.longitude)?;
        let ni = NutritionalIndex::new(request.nutritional_index);

        let reading = self.provider.resolve(coordinate, request.use_live_data);
        let effective_temperature = request.scenario.apply(&reading);
        let assessment = self.risk.evaluate(effective_temperature, ni);
        let projection = self.projector.project(assessment.risk_score);

        Ok(self.assembler.build(
            coordinate,
            reading,
            request.scenario,
            ni,
            assessment,
            projection,
        ))
    }
}
