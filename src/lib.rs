//! Marine Scorer Rust Implementation
//!
//! Deterministic scoring engine for marine environment indicators:
//! measurements → normalized scores → composite indices → categories →
//! recommendations.
//!
//! - `tables/`: immutable category tables (built-in or JSON-loaded)
//! - `utils/`: optimal-range normalization
//! - `metrics/`: water quality, HAB risk and species health composites
//! - `classify`: threshold bands for composite scores
//! - `recommendations`: critical vs preventive action sets
//! - `scorer`: `MarineScorer` coordinator producing reports and assessments
//!
//! Every entry point is a pure function of its inputs; tables are never
//! mutated after construction.

pub mod classify;
pub mod error;
pub mod measurements;
pub mod metrics;
pub mod recommendations;
pub mod scorer;
pub mod tables;
pub mod utils;

// Re-export commonly used types
pub use classify::{classify, HabRiskLevel, Thresholds, WaterQualityBand, HAB_RISK_THRESHOLDS, WATER_QUALITY_THRESHOLDS};
pub use error::ScoringError;
pub use measurements::{HabConditions, WaterSample};
pub use metrics::{hab_risk_score, mean_species_health, water_quality_score};
pub use recommendations::{select_recommendations, RecommendationSet};
pub use scorer::MarineScorer;
pub use tables::{CategoryAttributes, CategoryTables, Domain};
pub use utils::{normalize, OptimalRange};
