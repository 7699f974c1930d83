//! Scoring Integration Tests
//!
//! Exercises the public API end to end: shipped table configuration, the five
//! core entry points, and the scorer's assessments.

use approx::assert_relative_eq;
use marine_scorer_rust::classify::{classify_water_quality, ImpactLevel};
use marine_scorer_rust::tables::{parameter, CategoryTable, WaterQualityRecord};
use marine_scorer_rust::utils::normalize_or_zero;
use marine_scorer_rust::*;
use std::path::PathBuf;

fn shipped_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/marine_tables.json")
}

fn range_of(table: &CategoryTable<WaterQualityRecord>, name: &str) -> OptimalRange {
    table.get(name).unwrap().optimal_range
}

#[test]
fn shipped_config_matches_builtin_tables() {
    let loaded = CategoryTables::load(&shipped_config()).unwrap();
    assert_eq!(loaded, CategoryTables::builtin());
}

#[test]
fn scorer_from_shipped_config() {
    let scorer = MarineScorer::from_config(&shipped_config()).unwrap();
    let assessment = scorer.assess_marine_health(&WaterSample::default()).unwrap();
    assert_eq!(assessment.recommendation, RecommendationSet::Preventive);
}

#[test]
fn normalize_is_one_inside_every_builtin_range() {
    let tables = CategoryTables::builtin();
    for name in parameter::ALL {
        let range = range_of(tables.water_quality(), name);
        let steps = 20;
        for i in 0..=steps {
            let value = range.min() + (range.max() - range.min()) * i as f64 / steps as f64;
            assert_eq!(normalize(value, range).unwrap(), 1.0, "{} at {}", name, value);
        }
    }
}

#[test]
fn normalize_degrades_gracefully_past_input_domain() {
    // Direct API use can exceed slider bounds
    let tables = CategoryTables::builtin();
    let turbidity = range_of(tables.water_quality(), parameter::TURBIDITY);
    assert_eq!(normalize(1_000.0, turbidity).unwrap(), 0.0);
    assert_eq!(normalize_or_zero(-3.0, turbidity), 0.0);
    assert!(normalize(-3.0, turbidity).is_err());
}

#[test]
fn water_quality_scenarios() {
    assert_relative_eq!(water_quality_score(7.0, 3.0, 5.0, 1.0).unwrap(), 1.0, epsilon = 1e-12);

    // Only microplastics out of range: 20 particles/L → 1 - 10/10 = 0
    let score = water_quality_score(7.0, 3.0, 20.0, 1.0).unwrap();
    assert_relative_eq!(score, 0.7, epsilon = 1e-12);
    assert_eq!(classify_water_quality(score), WaterQualityBand::Fair);
}

#[test]
fn hab_scenarios() {
    assert_relative_eq!(hab_risk_score(35.0, 10.0, 35.0, 8.0), 1.0, epsilon = 1e-12);
    assert_eq!(classify(0.8, &HAB_RISK_THRESHOLDS), HabRiskLevel::High);
    assert_eq!(classify(0.8000001, &HAB_RISK_THRESHOLDS), HabRiskLevel::Critical);
}

#[test]
fn recommendation_scenarios() {
    assert_eq!(select_recommendations(0.3, &[0.8, 0.8]).unwrap(), RecommendationSet::Critical);
    assert_eq!(select_recommendations(0.9, &[0.2, 0.2]).unwrap(), RecommendationSet::Critical);
    assert_eq!(select_recommendations(0.9, &[0.9, 0.6]).unwrap(), RecommendationSet::Preventive);
    assert!(matches!(
        select_recommendations(0.9, &[]),
        Err(ScoringError::EmptyInput { .. })
    ));
}

#[test]
fn classify_is_monotonic_for_water_quality() {
    let mut previous = classify(0.0, &WATER_QUALITY_THRESHOLDS);
    for i in 0..=1000 {
        let band = classify(i as f64 / 1000.0, &WATER_QUALITY_THRESHOLDS);
        assert!(band >= previous);
        previous = band;
    }
}

#[test]
fn unknown_category_surfaces_to_caller() {
    let err = MarineScorer::new().lookup(Domain::Species, "Kraken").unwrap_err();
    assert_eq!(err.to_string(), "unknown category 'Kraken' in species table");
}

#[test]
fn invalid_weight_sum_rejected_at_load() {
    let json = r#"{"water_quality": [
        {"name": "Dissolved Oxygen", "optimal_range": [6.5, 8.5], "importance": 0.4},
        {"name": "Turbidity", "optimal_range": [0, 5], "importance": 0.2},
        {"name": "Microplastic Count", "optimal_range": [0, 10], "importance": 0.3},
        {"name": "Chemical Pollutants", "optimal_range": [0, 2], "importance": 0.2}
    ]}"#;
    let err = CategoryTables::from_json_str(json).unwrap_err();
    let scoring = err.downcast_ref::<ScoringError>().unwrap();
    assert!(matches!(
        scoring,
        ScoringError::InvalidTable { domain: Domain::WaterQuality, .. }
    ));
}

#[test]
fn custom_weights_flow_into_composite() {
    // Oxygen dominates: a bad oxygen reading costs more
    let json = r#"{"water_quality": [
        {"name": "Dissolved Oxygen", "optimal_range": [6.5, 8.5], "importance": 0.7},
        {"name": "Turbidity", "optimal_range": [0, 5], "importance": 0.1},
        {"name": "Microplastic Count", "optimal_range": [0, 10], "importance": 0.1},
        {"name": "Chemical Pollutants", "optimal_range": [0, 2], "importance": 0.1}
    ]}"#;
    let scorer = MarineScorer::with_tables(CategoryTables::from_json_str(json).unwrap()).unwrap();
    let sample = WaterSample {
        dissolved_oxygen: 0.0,
        ..WaterSample::default()
    };
    let result = scorer.water_quality(&sample).unwrap();
    assert_relative_eq!(result.score, 0.3, epsilon = 1e-12);
}

#[test]
fn reports_serialize_to_json() {
    let scorer = MarineScorer::new();
    let value = serde_json::to_value(scorer.plastic_report()).unwrap();
    assert_eq!(value["findings"][3]["category"], "Industrial Plastic Waste");
    assert_eq!(value["findings"][3]["impact_level"], "Severe");

    let assessment = scorer.assess_marine_health(&WaterSample::default()).unwrap();
    let value = serde_json::to_value(&assessment).unwrap();
    assert_eq!(value["water_quality_band"], "good");
    assert_eq!(value["recommendation"], "Preventive");

    assert_eq!(scorer.oil_spill_report().findings[2].impact_level, ImpactLevel::Severe);
}
