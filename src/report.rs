//! Assessment reports
//!
//! The single externally exported artifact: everything one assessment
//! computed, plus the provenance needed to interpret it (live vs modelled
//! temperature, scenario, timestamps). Consumers serialize this record for
//! display or CSV export; nothing here decides anything.

use crate::advice::ManagementAdvice;
use crate::clock::Clock;
use crate::population::PopulationProjection;
use crate::risk::RiskAssessment;
use crate::scenario::ClimateScenario;
use crate::temperature::TemperatureReading;
use crate::types::{Coordinate, NutritionalIndex};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Immutable, self-describing record of one complete assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub coordinate: Coordinate,
    pub reading: TemperatureReading,
    pub scenario: ClimateScenario,
    pub nutritional_index: NutritionalIndex,
    pub assessment: RiskAssessment,
    pub projection: PopulationProjection,
    pub advice: ManagementAdvice,
    pub created_at: DateTime<Utc>,
}

/// Packages computed values into a report, stamping the creation time.
///
/// Pure aggregation; no computation happens here.
#[derive(Debug)]
pub struct ReportAssembler {
    clock: Arc<dyn Clock>,
}

impl ReportAssembler {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn build(
        &self,
        coordinate: Coordinate,
        reading: TemperatureReading,
        scenario: ClimateScenario,
        nutritional_index: NutritionalIndex,
        assessment: RiskAssessment,
        projection: PopulationProjection,
    ) -> AssessmentReport {
        let advice = ManagementAdvice::from_risk_score(assessment.risk_score);

        AssessmentReport {
            coordinate,
            reading,
            scenario,
            nutritional_index,
            assessment,
            projection,
            advice,
            created_at: self.clock.now(),
        }
    }
}
