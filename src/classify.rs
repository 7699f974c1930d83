//! Classification functions for composite scores.
//!
//! Every classifier is a descending chain of strict `>` comparisons: the first
//! cutoff the score exceeds picks the label, otherwise the floor label applies.
//! A score sitting exactly on a cutoff falls into the lower bucket, and NaN
//! always lands on the floor. Scores are never clamped before comparison.

use crate::error::{Result, ScoringError};
use serde::Serialize;
use std::fmt;

/// Ordered (label, cutoff) bands checked highest cutoff first
#[derive(Debug, Clone, Copy)]
pub struct Thresholds<'a, L> {
    bands: &'a [(L, f64)],
    floor: L,
}

impl<'a, L: Copy> Thresholds<'a, L> {
    /// Build a threshold set; cutoffs must be finite and strictly descending
    pub fn new(bands: &'a [(L, f64)], floor: L) -> Result<Self> {
        if bands.iter().any(|(_, cutoff)| !cutoff.is_finite()) {
            return Err(ScoringError::InvalidThresholds {
                reason: "cutoffs must be finite".to_string(),
            });
        }
        if bands.windows(2).any(|w| w[0].1 <= w[1].1) {
            return Err(ScoringError::InvalidThresholds {
                reason: "cutoffs must be strictly descending".to_string(),
            });
        }
        Ok(Self { bands, floor })
    }

    pub fn bands(&self) -> &'a [(L, f64)] {
        self.bands
    }

    pub fn floor(&self) -> L {
        self.floor
    }
}

/// Map a score to its label
pub fn classify<L: Copy>(score: f64, thresholds: &Thresholds<'_, L>) -> L {
    thresholds
        .bands
        .iter()
        .find(|(_, cutoff)| score > *cutoff)
        .map(|(label, _)| *label)
        .unwrap_or(thresholds.floor)
}

// ============================================================================
// HAB Risk
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HabRiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl HabRiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HabRiskLevel::Low => "Low",
            HabRiskLevel::Moderate => "Moderate",
            HabRiskLevel::High => "High",
            HabRiskLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for HabRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const HAB_RISK_THRESHOLDS: Thresholds<'static, HabRiskLevel> = Thresholds {
    bands: &[
        (HabRiskLevel::Critical, 0.8),
        (HabRiskLevel::High, 0.6),
        (HabRiskLevel::Moderate, 0.4),
    ],
    floor: HabRiskLevel::Low,
};

pub fn classify_hab_risk(score: f64) -> HabRiskLevel {
    classify(score, &HAB_RISK_THRESHOLDS)
}

// ============================================================================
// Water Quality
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterQualityBand {
    Poor,
    Fair,
    Good,
}

impl WaterQualityBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterQualityBand::Poor => "poor",
            WaterQualityBand::Fair => "fair",
            WaterQualityBand::Good => "good",
        }
    }

    /// Display colour for the score readout
    pub fn color(&self) -> &'static str {
        match self {
            WaterQualityBand::Good => "green",
            WaterQualityBand::Fair => "orange",
            WaterQualityBand::Poor => "red",
        }
    }
}

pub const WATER_QUALITY_THRESHOLDS: Thresholds<'static, WaterQualityBand> = Thresholds {
    bands: &[(WaterQualityBand::Good, 0.7), (WaterQualityBand::Fair, 0.4)],
    floor: WaterQualityBand::Poor,
};

pub fn classify_water_quality(score: f64) -> WaterQualityBand {
    classify(score, &WATER_QUALITY_THRESHOLDS)
}

// ============================================================================
// Ecological Impact
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ImpactLevel {
    Lower,
    Moderate,
    Significant,
    Severe,
}

impl ImpactLevel {
    pub fn description(&self) -> &'static str {
        match self {
            ImpactLevel::Severe => "Severe impact requiring immediate attention",
            ImpactLevel::Significant => "Significant impact on marine life",
            ImpactLevel::Moderate => "Moderate environmental concern",
            ImpactLevel::Lower => "Lower impact but monitoring required",
        }
    }
}

pub const IMPACT_THRESHOLDS: Thresholds<'static, ImpactLevel> = Thresholds {
    bands: &[
        (ImpactLevel::Severe, 0.8),
        (ImpactLevel::Significant, 0.6),
        (ImpactLevel::Moderate, 0.4),
    ],
    floor: ImpactLevel::Lower,
};

pub fn classify_impact(ecological_impact: f64) -> ImpactLevel {
    classify(ecological_impact, &IMPACT_THRESHOLDS)
}

// ============================================================================
// Species Health
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SpeciesHealthBand {
    Critical,
    Stressed,
    Healthy,
}

impl SpeciesHealthBand {
    /// Bar colour in the species health chart
    pub fn color(&self) -> &'static str {
        match self {
            SpeciesHealthBand::Healthy => "green",
            SpeciesHealthBand::Stressed => "yellow",
            SpeciesHealthBand::Critical => "red",
        }
    }
}

pub const SPECIES_HEALTH_THRESHOLDS: Thresholds<'static, SpeciesHealthBand> = Thresholds {
    bands: &[(SpeciesHealthBand::Healthy, 0.6), (SpeciesHealthBand::Stressed, 0.4)],
    floor: SpeciesHealthBand::Critical,
};

pub fn classify_species_health(health_index: f64) -> SpeciesHealthBand {
    classify(health_index, &SPECIES_HEALTH_THRESHOLDS)
}
