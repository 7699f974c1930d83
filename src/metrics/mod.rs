//! Metric modules for marine scoring
//!
//! Each composite indicator is implemented in its own module.

pub mod hab_risk;
pub mod species_health;
pub mod water_quality;

// Re-export metric functions
pub use hab_risk::{hab_risk_score, HabRiskResult, HabSensitivities};
pub use species_health::{mean_species_health, summarize_species, SpeciesHealthSummary, SpeciesStatus};
pub use water_quality::{water_quality_score, ParameterSpec, WaterQualityProfile, WaterQualityResult};
