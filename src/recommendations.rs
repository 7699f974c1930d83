//! Conservation recommendations and domain advisories
//!
//! The selector picks exactly one of two canonical action lists. Advisories are
//! fixed per-domain lists shown alongside each category report.

use crate::error::Result;
use crate::metrics::mean_species_health;
use crate::tables::Domain;
use serde::Serialize;

/// Water quality or mean species health below this selects the critical set
pub const CRITICAL_CUTOFF: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecommendationSet {
    Critical,
    Preventive,
}

impl RecommendationSet {
    pub fn heading(&self) -> &'static str {
        match self {
            RecommendationSet::Critical => "Critical Actions Required:",
            RecommendationSet::Preventive => "Preventive Measures:",
        }
    }

    /// Ordered action list
    pub fn actions(&self) -> &'static [&'static str] {
        match self {
            RecommendationSet::Critical => &[
                "Implement immediate water quality improvement measures",
                "Establish protected marine zones",
                "Reduce industrial discharge",
                "Monitor species population regularly",
            ],
            RecommendationSet::Preventive => &[
                "Continue regular ecosystem monitoring",
                "Maintain sustainable fishing practices",
                "Support marine conservation programs",
                "Engage in community education",
            ],
        }
    }
}

/// Select the recommendation set
///
/// `Critical` when `water_quality_score < 0.5` or the mean of `species_scores`
/// is below 0.5, otherwise `Preventive`. An empty `species_scores` is an
/// `EmptyInput` error.
pub fn select_recommendations(water_quality_score: f64, species_scores: &[f64]) -> Result<RecommendationSet> {
    let avg_species_health = mean_species_health(species_scores)?;

    if water_quality_score < CRITICAL_CUTOFF || avg_species_health < CRITICAL_CUTOFF {
        Ok(RecommendationSet::Critical)
    } else {
        Ok(RecommendationSet::Preventive)
    }
}

/// Fixed advisory list for a domain
///
/// Species and water quality share the recommendation sets above and have no
/// separate advisory.
pub fn advisories(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Plastic => &[
            "Reduce single-use plastics",
            "Support local recycling programs",
            "Choose sustainable alternatives",
        ],
        Domain::Coral => &["Ocean temperature", "Water acidity", "Environmental pollution"],
        Domain::OilSpill => &["Marine habitat damage", "Ecosystem disruption", "Biodiversity impact"],
        Domain::Hab => &["Water quality degradation", "Marine life stress", "Ecosystem imbalance"],
        Domain::Species | Domain::WaterQuality => &[],
    }
}
