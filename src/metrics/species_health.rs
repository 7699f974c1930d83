//! SPECIES HEALTH
//!
//! Arithmetic mean of species health indices, plus the per-species banding
//! shown in the species health chart.

use crate::classify::{classify_species_health, SpeciesHealthBand};
use crate::error::{Result, ScoringError};
use crate::tables::{CategoryTable, SpeciesRecord, Trend};
use serde::Serialize;

/// Mean of a sequence of health scores; `EmptyInput` when there are none
pub fn mean_species_health(scores: &[f64]) -> Result<f64> {
    if scores.is_empty() {
        return Err(ScoringError::EmptyInput {
            context: "species health scores",
        });
    }
    Ok(scores.iter().sum::<f64>() / scores.len() as f64)
}

/// One species group as rendered in the health chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesStatus {
    pub species: String,
    pub health_index: f64,
    pub band: SpeciesHealthBand,
    pub trend: Trend,
}

/// Species health across the whole table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesHealthSummary {
    pub species: Vec<SpeciesStatus>,
    pub mean_health: f64,
    /// Species whose trend is critical
    pub critical_trends: Vec<String>,
}

impl SpeciesHealthSummary {
    /// Health indices in table order
    pub fn health_indices(&self) -> Vec<f64> {
        self.species.iter().map(|s| s.health_index).collect()
    }
}

pub fn summarize_species(table: &CategoryTable<SpeciesRecord>) -> Result<SpeciesHealthSummary> {
    let species: Vec<SpeciesStatus> = table
        .iter()
        .map(|(name, rec)| SpeciesStatus {
            species: name.to_string(),
            health_index: rec.health_index,
            band: classify_species_health(rec.health_index),
            trend: rec.trend,
        })
        .collect();

    let indices: Vec<f64> = species.iter().map(|s| s.health_index).collect();
    let mean_health = mean_species_health(&indices)?;

    let critical_trends = species
        .iter()
        .filter(|s| s.trend == Trend::Critical)
        .map(|s| s.species.clone())
        .collect();

    Ok(SpeciesHealthSummary {
        species,
        mean_health,
        critical_trends,
    })
}
