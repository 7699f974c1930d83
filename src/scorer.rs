//! Marine Scorer - Main coordinator for marine ecosystem assessments
//!
//! Owns one immutable set of category tables, derives the composite profiles
//! from them once at construction, and produces the per-domain reports and
//! end-to-end assessments the presentation layer renders.

use crate::classify::{
    classify_hab_risk, classify_impact, classify_water_quality, HabRiskLevel, ImpactLevel, WaterQualityBand,
};
use crate::error::{Result, ScoringError};
use crate::measurements::{HabConditions, WaterSample};
use crate::metrics::*;
use crate::recommendations::{advisories, select_recommendations, RecommendationSet};
use crate::tables::{CategoryAttributes, CategoryTables, Domain};
use serde::Serialize;
use std::path::Path;

/// Main marine ecosystem scorer
#[derive(Debug, Clone)]
pub struct MarineScorer {
    tables: CategoryTables,
    water_profile: WaterQualityProfile,
    hab_sensitivities: HabSensitivities,
}

/// Plastic type with its impact classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlasticFinding {
    pub category: String,
    pub detection_weight: f64,
    pub ecological_impact: f64,
    pub impact_level: ImpactLevel,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlasticReport {
    pub findings: Vec<PlasticFinding>,
    pub actions: &'static [&'static str],
}

/// Coral condition with its share of the reef
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoralFinding {
    pub condition: String,
    pub weight: f64,
    /// weight / total weight × 100
    pub share_percent: f64,
    pub recovery_potential: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoralReport {
    pub findings: Vec<CoralFinding>,
    pub stress_factors: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpillFinding {
    pub severity: String,
    pub detection_weight: f64,
    pub ecological_impact: f64,
    pub impact_level: ImpactLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OilSpillReport {
    pub findings: Vec<SpillFinding>,
    pub critical_effects: &'static [&'static str],
}

/// Water quality + species health + recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarineHealthAssessment {
    pub water_quality: WaterQualityResult,
    pub water_quality_band: WaterQualityBand,
    pub species: SpeciesHealthSummary,
    pub recommendation: RecommendationSet,
    pub actions: &'static [&'static str],
    /// Measurements outside their declared input domain (scored as given)
    pub out_of_domain: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabAssessment {
    pub risk: HabRiskResult,
    pub level: HabRiskLevel,
    pub concerns: &'static [&'static str],
    pub out_of_domain: Vec<&'static str>,
}

impl MarineScorer {
    /// Scorer over the built-in tables
    pub fn new() -> Self {
        Self {
            tables: CategoryTables::builtin(),
            water_profile: WaterQualityProfile::BUILTIN,
            hab_sensitivities: HabSensitivities::BUILTIN,
        }
    }

    /// Scorer over caller-supplied tables (validated here)
    pub fn with_tables(tables: CategoryTables) -> Result<Self> {
        tables.validate()?;
        Self::from_validated(tables)
    }

    /// Scorer over tables loaded from a JSON file
    pub fn from_config(path: &Path) -> anyhow::Result<Self> {
        // `load` has already validated
        let tables = CategoryTables::load(path)?;
        Ok(Self::from_validated(tables)?)
    }

    fn from_validated(tables: CategoryTables) -> Result<Self> {
        let water_profile = WaterQualityProfile::from_table(tables.water_quality())?;
        let hab_sensitivities = HabSensitivities::from_table(tables.hab())?;

        tracing::debug!(
            "Marine scorer ready: {} plastic, {} coral, {} spill, {} species categories",
            tables.plastic().len(),
            tables.coral().len(),
            tables.oil_spill().len(),
            tables.species().len()
        );

        Ok(Self {
            tables,
            water_profile,
            hab_sensitivities,
        })
    }

    pub fn tables(&self) -> &CategoryTables {
        &self.tables
    }

    pub fn lookup(&self, domain: Domain, category: &str) -> Result<CategoryAttributes> {
        self.tables.get(domain, category)
    }

    // ------------------------------------------------------------------------
    // Composites
    // ------------------------------------------------------------------------

    pub fn water_quality(&self, sample: &WaterSample) -> Result<WaterQualityResult> {
        self.water_profile.score(sample)
    }

    pub fn hab_risk(&self, conditions: &HabConditions) -> HabRiskResult {
        self.hab_sensitivities.score(conditions)
    }

    // ------------------------------------------------------------------------
    // Category reports
    // ------------------------------------------------------------------------

    pub fn plastic_report(&self) -> PlasticReport {
        let findings = self
            .tables
            .plastic()
            .iter()
            .map(|(name, rec)| {
                let impact_level = classify_impact(rec.ecological_impact);
                PlasticFinding {
                    category: name.to_string(),
                    detection_weight: rec.detection_weight,
                    ecological_impact: rec.ecological_impact,
                    impact_level,
                    description: impact_level.description(),
                }
            })
            .collect();

        PlasticReport {
            findings,
            actions: advisories(Domain::Plastic),
        }
    }

    /// Coral conditions as shares of the total weight; `EmptyInput` when the
    /// weights sum to zero
    pub fn coral_report(&self) -> Result<CoralReport> {
        let total: f64 = self.tables.coral().iter().map(|(_, rec)| rec.weight).sum();
        if total <= 0.0 {
            return Err(ScoringError::EmptyInput {
                context: "coral condition weights",
            });
        }

        let findings = self
            .tables
            .coral()
            .iter()
            .map(|(name, rec)| CoralFinding {
                condition: name.to_string(),
                weight: rec.weight,
                share_percent: rec.weight / total * 100.0,
                recovery_potential: rec.recovery_potential,
            })
            .collect();

        Ok(CoralReport {
            findings,
            stress_factors: advisories(Domain::Coral),
        })
    }

    pub fn oil_spill_report(&self) -> OilSpillReport {
        let findings = self
            .tables
            .oil_spill()
            .iter()
            .map(|(name, rec)| SpillFinding {
                severity: name.to_string(),
                detection_weight: rec.detection_weight,
                ecological_impact: rec.ecological_impact,
                impact_level: classify_impact(rec.ecological_impact),
            })
            .collect();

        OilSpillReport {
            findings,
            critical_effects: advisories(Domain::OilSpill),
        }
    }

    pub fn species_report(&self) -> Result<SpeciesHealthSummary> {
        summarize_species(self.tables.species())
    }

    // ------------------------------------------------------------------------
    // Assessments
    // ------------------------------------------------------------------------

    /// Assess a water sample against the species table's health indices
    pub fn assess_marine_health(&self, sample: &WaterSample) -> Result<MarineHealthAssessment> {
        let species = self.species_report()?;
        let indices = species.health_indices();
        self.assess_with_summary(sample, species, &indices)
    }

    /// Assess a water sample against caller-observed species health scores
    ///
    /// The species summary still describes the table; the recommendation uses
    /// `species_scores`.
    pub fn assess_marine_health_with(
        &self,
        sample: &WaterSample,
        species_scores: &[f64],
    ) -> Result<MarineHealthAssessment> {
        let species = self.species_report()?;
        self.assess_with_summary(sample, species, species_scores)
    }

    fn assess_with_summary(
        &self,
        sample: &WaterSample,
        species: SpeciesHealthSummary,
        species_scores: &[f64],
    ) -> Result<MarineHealthAssessment> {
        let out_of_domain = sample.out_of_domain();
        if !out_of_domain.is_empty() {
            tracing::debug!("Scoring measurements outside input domain: {:?}", out_of_domain);
        }

        let water_quality = self.water_quality(sample)?;
        let water_quality_band = classify_water_quality(water_quality.score);
        let recommendation = select_recommendations(water_quality.score, species_scores)?;

        tracing::debug!(
            "Marine health: water quality {:.3} ({}), recommendation {:?}",
            water_quality.score,
            water_quality_band.as_str(),
            recommendation
        );

        Ok(MarineHealthAssessment {
            water_quality,
            water_quality_band,
            species,
            recommendation,
            actions: recommendation.actions(),
            out_of_domain,
        })
    }

    pub fn assess_hab(&self, conditions: &HabConditions) -> HabAssessment {
        let risk = self.hab_risk(conditions);
        let level = classify_hab_risk(risk.score);

        tracing::debug!("HAB risk {:.3} ({})", risk.score, level);

        HabAssessment {
            risk,
            level,
            concerns: advisories(Domain::Hab),
            out_of_domain: conditions.out_of_domain(),
        }
    }
}

impl Default for MarineScorer {
    fn default() -> Self {
        Self::new()
    }
}
