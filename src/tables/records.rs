//! Typed attribute records, one per analysis domain

use super::Domain;
use crate::utils::OptimalRange;
use serde::{Deserialize, Serialize};

/// Per-domain record stored in a `CategoryTable`
///
/// `unit_fields` lists every attribute that must be a finite value in [0,1];
/// table validation checks them all.
pub trait CategoryRecord: Copy {
    const DOMAIN: Domain;

    fn unit_fields(&self) -> Vec<(&'static str, f64)>;

    fn into_attributes(self) -> CategoryAttributes;
}

/// Plastic waste type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlasticRecord {
    pub detection_weight: f64,
    pub ecological_impact: f64,
}

/// Coral condition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoralRecord {
    /// Share of the reef observed in this condition
    pub weight: f64,
    pub recovery_potential: f64,
}

/// Oil spill severity level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpillRecord {
    pub detection_weight: f64,
    pub ecological_impact: f64,
}

/// Harmful algal bloom risk factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabFactorRecord {
    pub sensitivity: f64,
}

/// Population trend of a species group, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Stable,
    Declining,
    Critical,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Stable => "stable",
            Trend::Declining => "declining",
            Trend::Critical => "critical",
        }
    }

    /// Status icon shown next to the species name
    pub fn icon(&self) -> &'static str {
        match self {
            Trend::Critical => "🔴",
            Trend::Declining => "⚠️",
            Trend::Stable => "✅",
        }
    }
}

/// Species group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub health_index: f64,
    pub trend: Trend,
}

/// Water-quality parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterQualityRecord {
    pub optimal_range: OptimalRange,
    /// Weight in the water quality composite
    pub importance: f64,
}

/// Tagged attribute record returned by `CategoryTables::get`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "domain", rename_all = "snake_case")]
pub enum CategoryAttributes {
    Plastic(PlasticRecord),
    Coral(CoralRecord),
    OilSpill(SpillRecord),
    Hab(HabFactorRecord),
    Species(SpeciesRecord),
    WaterQuality(WaterQualityRecord),
}

impl CategoryAttributes {
    pub fn domain(&self) -> Domain {
        match self {
            CategoryAttributes::Plastic(_) => Domain::Plastic,
            CategoryAttributes::Coral(_) => Domain::Coral,
            CategoryAttributes::OilSpill(_) => Domain::OilSpill,
            CategoryAttributes::Hab(_) => Domain::Hab,
            CategoryAttributes::Species(_) => Domain::Species,
            CategoryAttributes::WaterQuality(_) => Domain::WaterQuality,
        }
    }
}

impl CategoryRecord for PlasticRecord {
    const DOMAIN: Domain = Domain::Plastic;

    fn unit_fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("detection_weight", self.detection_weight),
            ("ecological_impact", self.ecological_impact),
        ]
    }

    fn into_attributes(self) -> CategoryAttributes {
        CategoryAttributes::Plastic(self)
    }
}

impl CategoryRecord for CoralRecord {
    const DOMAIN: Domain = Domain::Coral;

    fn unit_fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("weight", self.weight),
            ("recovery_potential", self.recovery_potential),
        ]
    }

    fn into_attributes(self) -> CategoryAttributes {
        CategoryAttributes::Coral(self)
    }
}

impl CategoryRecord for SpillRecord {
    const DOMAIN: Domain = Domain::OilSpill;

    fn unit_fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("detection_weight", self.detection_weight),
            ("ecological_impact", self.ecological_impact),
        ]
    }

    fn into_attributes(self) -> CategoryAttributes {
        CategoryAttributes::OilSpill(self)
    }
}

impl CategoryRecord for HabFactorRecord {
    const DOMAIN: Domain = Domain::Hab;

    fn unit_fields(&self) -> Vec<(&'static str, f64)> {
        vec![("sensitivity", self.sensitivity)]
    }

    fn into_attributes(self) -> CategoryAttributes {
        CategoryAttributes::Hab(self)
    }
}

impl CategoryRecord for SpeciesRecord {
    const DOMAIN: Domain = Domain::Species;

    fn unit_fields(&self) -> Vec<(&'static str, f64)> {
        vec![("health_index", self.health_index)]
    }

    fn into_attributes(self) -> CategoryAttributes {
        CategoryAttributes::Species(self)
    }
}

impl CategoryRecord for WaterQualityRecord {
    const DOMAIN: Domain = Domain::WaterQuality;

    fn unit_fields(&self) -> Vec<(&'static str, f64)> {
        // Range bounds are physical units, validated by OptimalRange itself
        vec![("importance", self.importance)]
    }

    fn into_attributes(self) -> CategoryAttributes {
        CategoryAttributes::WaterQuality(self)
    }
}
