//! End-to-end assessment tests.
//!
//! These tests run the full pipeline with a pinned clock and an
//! unreachable endpoint, so every value is deterministic and the live path
//! always exercises the observable fallback:
//! - tier/score agreement with the branch formulas over the whole domain
//! - the published end-to-end scenarios for Mersin Bay
//! - projection crossing years

use approx::assert_relative_eq;
use chrono::{TimeZone, Utc};
use std::sync::Arc;
use stef_engine::clock::ManualClock;
use stef_engine::config::EngineConfig;
use stef_engine::engine::{AssessmentEngine, AssessmentRequest};
use stef_engine::parameters::ProviderParameters;
use stef_engine::risk::{RiskEngine, RiskTier};
use stef_engine::scenario::ClimateScenario;
use stef_engine::types::NutritionalIndex;

/// Engine pinned to mid-March 2026 with a connection-refused endpoint.
fn offline_engine() -> AssessmentEngine {
    let config = EngineConfig {
        provider: ProviderParameters {
            endpoint: "http://127.0.0.1:9/erddap/griddap/sst.json".to_string(),
            timeout_secs: 2,
            ..ProviderParameters::default()
        },
        ..EngineConfig::default()
    };
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap(),
    ));
    AssessmentEngine::with_clock(config, clock).expect("engine construction")
}

fn mersin_request() -> AssessmentRequest {
    AssessmentRequest {
        latitude: 36.8,
        longitude: 34.6,
        scenario: ClimateScenario::Baseline,
        nutritional_index: 1.0,
        use_live_data: false,
    }
}

mod mersin_bay_scenarios {
    use super::*;

    /// Well-fed baseline assessment at Mersin Bay in March.
    #[test]
    fn test_baseline_well_fed() {
        let mut engine = offline_engine();
        let report = engine.assess(&mersin_request()).unwrap();

        // Fallback model in March: 28*cos(36.8 deg) + 5, no seasonal term
        assert_relative_eq!(report.reading.value_celsius, 27.4);
        assert!(!report.reading.is_live);
        assert_eq!(report.reading.source_label, "geographic-model");

        assert_relative_eq!(report.assessment.lethal_threshold, 31.5);
        assert_eq!(report.assessment.risk_tier, RiskTier::HighRisk);
        // 50 + (27.4 - 25)/(29.5 - 25) * 25 = 63.3
        assert_eq!(report.assessment.risk_score, 63);
        assert_relative_eq!(report.assessment.safety_margin, 4.1, epsilon = 1e-9);
        assert_eq!(report.assessment.q10, 2.45);
    }

    /// A starved animal under the hottest scenario crosses its depressed
    /// lethal threshold.
    #[test]
    fn test_starved_under_ssp585_is_lethal() {
        let mut engine = offline_engine();
        let report = engine
            .assess(&AssessmentRequest {
                scenario: ClimateScenario::Ssp585,
                nutritional_index: 0.0,
                ..mersin_request()
            })
            .unwrap();

        // threshold = 31.5 - 1.07 = 30.43; T = 27.4 + 3.2 = 30.6
        assert_relative_eq!(report.assessment.lethal_threshold, 30.43);
        assert_relative_eq!(report.assessment.effective_temperature, 30.6, epsilon = 1e-9);
        assert_eq!(report.assessment.risk_tier, RiskTier::Lethal);
        assert_eq!(report.assessment.risk_score, 100);
        assert!(report.assessment.safety_margin < 0.0);
    }

    /// The same conditions with a well-fed animal stay below lethal.
    #[test]
    fn test_well_fed_under_ssp585_is_critical() {
        let mut engine = offline_engine();
        let report = engine
            .assess(&AssessmentRequest {
                scenario: ClimateScenario::Ssp585,
                ..mersin_request()
            })
            .unwrap();

        // T = 30.6 against threshold 31.5: inside the critical band
        assert_eq!(report.assessment.risk_tier, RiskTier::Critical);
        // 75 + (30.6 - 29.5)/2 * 25 = 88.75
        assert_eq!(report.assessment.risk_score, 89);
    }

    /// Identical requests against the pinned clock give identical reports.
    #[test]
    fn test_reproducible() {
        let mut engine = offline_engine();
        let first = engine.assess(&mersin_request()).unwrap();
        let second = engine.assess(&mersin_request()).unwrap();
        assert_eq!(first, second);
    }
}

mod tier_ladder_properties {
    use super::*;

    /// Tiers are contiguous and non-overlapping across [10, 40] °C, and
    /// every score matches the branch formula for its tier.
    #[test]
    fn test_tiers_partition_temperature_domain() {
        let engine = RiskEngine::new();

        for ni_percent in [0, 25, 50, 75, 100] {
            let ni = NutritionalIndex::new(ni_percent as f64 / 100.0);
            let threshold = engine.lethal_threshold(ni);
            let critical_floor = threshold - 2.0;

            let mut step = 0;
            loop {
                let t = 10.0 + step as f64 * 0.01;
                if t > 40.0 {
                    break;
                }
                step += 1;

                let assessment = engine.evaluate(t, ni);
                let (expected_tier, expected_raw) = if t >= threshold {
                    (RiskTier::Lethal, 100.0)
                } else if t >= critical_floor {
                    (RiskTier::Critical, 75.0 + (t - critical_floor) / 2.0 * 25.0)
                } else if t >= 25.0 {
                    (
                        RiskTier::HighRisk,
                        50.0 + (t - 25.0) / (critical_floor - 25.0) * 25.0,
                    )
                } else {
                    (RiskTier::Stable, t / 25.0 * 50.0)
                };

                assert_eq!(
                    assessment.risk_tier, expected_tier,
                    "Tier mismatch at T={} NI={}",
                    t, ni.value()
                );
                assert_eq!(
                    assessment.risk_score,
                    expected_raw.round().clamp(0.0, 100.0) as u8,
                    "Score mismatch at T={} NI={}",
                    t,
                    ni.value()
                );
            }
        }
    }

    /// The score never decreases as temperature rises.
    #[test]
    fn test_score_monotone_in_temperature() {
        let engine = RiskEngine::new();
        let ni = NutritionalIndex::new(0.6);

        let mut previous = 0;
        for step in 0..=3000 {
            let t = 10.0 + step as f64 * 0.01;
            let score = engine.evaluate(t, ni).risk_score;
            assert!(
                score >= previous,
                "Score dropped from {} to {} at T={}",
                previous,
                score,
                t
            );
            previous = score;
        }
    }

    /// Thresholds across the nutritional range stay inside [30.43, 31.5].
    #[test]
    fn test_threshold_bounds() {
        let engine = RiskEngine::new();

        for step in 0..=100 {
            let ni = NutritionalIndex::new(step as f64 / 100.0);
            let threshold = engine.lethal_threshold(ni);
            assert!(
                (30.43..=31.5).contains(&threshold),
                "Threshold {} out of bounds at NI={}",
                threshold,
                ni.value()
            );
        }
    }
}

mod projection_properties {
    use super::*;

    /// The full report's projection matches the standalone projector and
    /// crosses 50% in 2040 for the baseline Mersin assessment's decay.
    #[test]
    fn test_report_projection_is_pure_in_risk_score() {
        let mut engine = offline_engine();
        let report = engine.assess(&mersin_request()).unwrap();

        let standalone =
            stef_engine::population::PopulationProjector::new().project(report.assessment.risk_score);
        assert_eq!(report.projection, standalone);

        // score 63 -> decay 0.05 + 63/500 = 0.176
        assert_relative_eq!(report.projection.decay_rate, 0.176, epsilon = 1e-12);
        assert!(report.projection.collapse_year.is_some());
    }

    /// Year-by-year values follow the closed-form decay.
    #[test]
    fn test_projection_matches_closed_form() {
        let projection = stef_engine::population::PopulationProjector::new().project(63);

        for point in &projection.points {
            let expected = 100.0 * (-0.176 * f64::from(point.year - 2026)).exp();
            assert_relative_eq!(point.relative_population_pct, expected, epsilon = 1e-9);
        }
    }
}

mod live_fallback {
    use super::*;

    /// With live data requested but the source unreachable, the report is
    /// still produced and carries model provenance.
    #[test]
    fn test_unreachable_live_source_degrades_gracefully() {
        let mut engine = offline_engine();
        let report = engine
            .assess(&AssessmentRequest {
                use_live_data: true,
                ..mersin_request()
            })
            .unwrap();

        assert!(!report.reading.is_live);
        assert_eq!(report.reading.source_label, "geographic-model");
        // The fallback value is the same one model-only mode produces
        assert_relative_eq!(report.reading.value_celsius, 27.4);
    }
}
