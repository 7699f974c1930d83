//! Table loading and validation
//!
//! JSON layout (every domain optional; a missing domain keeps the built-in table):
//!
//! ```json
//! {
//!   "plastic": [{"name": "Microplastics", "detection_weight": 0.3, "ecological_impact": 0.8}],
//!   "water_quality": [{"name": "Turbidity", "optimal_range": [0, 5], "importance": 0.2}]
//! }
//! ```
//!
//! Validation runs on every load and rejects:
//! - duplicate category names within a table
//! - weights, impacts, recovery and health values that are not finite or not in [0,1]
//! - water-quality / HAB tables missing one of the four composite inputs
//! - composite weights that do not sum to 1.0
//! - an empty species table (the default recommendation averages it)
//! - coral weights summing to zero (the coral report divides by the total)

use super::records::*;
use super::{parameter, risk_factor, CategoryEntry, CategoryTable, CategoryTables, Domain};
use crate::error::{Result, ScoringError};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Allowed drift of a composite weight sum from 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// On-disk table configuration
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plastic: Option<Vec<CategoryEntry<PlasticRecord>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coral: Option<Vec<CategoryEntry<CoralRecord>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oil_spill: Option<Vec<CategoryEntry<SpillRecord>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hab: Option<Vec<CategoryEntry<HabFactorRecord>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<Vec<CategoryEntry<SpeciesRecord>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_quality: Option<Vec<CategoryEntry<WaterQualityRecord>>>,
}

impl TableConfig {
    /// Merge over the built-in tables and validate the result
    pub fn into_tables(self) -> Result<CategoryTables> {
        let builtin = CategoryTables::builtin();

        fn pick<R: CategoryRecord>(
            entries: Option<Vec<CategoryEntry<R>>>,
            fallback: CategoryTable<R>,
        ) -> CategoryTable<R> {
            entries.map(CategoryTable::from_entries).unwrap_or(fallback)
        }

        let tables = CategoryTables {
            plastic: pick(self.plastic, builtin.plastic),
            coral: pick(self.coral, builtin.coral),
            oil_spill: pick(self.oil_spill, builtin.oil_spill),
            hab: pick(self.hab, builtin.hab),
            species: pick(self.species, builtin.species),
            water_quality: pick(self.water_quality, builtin.water_quality),
        };

        tables.validate()?;
        Ok(tables)
    }
}

impl From<&CategoryTables> for TableConfig {
    fn from(tables: &CategoryTables) -> Self {
        Self {
            plastic: Some(tables.plastic.entries().to_vec()),
            coral: Some(tables.coral.entries().to_vec()),
            oil_spill: Some(tables.oil_spill.entries().to_vec()),
            hab: Some(tables.hab.entries().to_vec()),
            species: Some(tables.species.entries().to_vec()),
            water_quality: Some(tables.water_quality.entries().to_vec()),
        }
    }
}

impl CategoryTables {
    /// Parse and validate tables from a JSON document
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: TableConfig = serde_json::from_str(json)
            .with_context(|| "Failed to parse category table JSON")?;

        let tables = config.into_tables().map_err(|e| {
            tracing::warn!("Rejected category tables: {}", e);
            e
        })?;

        Ok(tables)
    }

    /// Load tables from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read category table file: {:?}", path))?;

        let tables = Self::from_json_str(&contents)
            .with_context(|| format!("Invalid category table file: {:?}", path))?;

        tracing::info!(
            "Loaded category tables from {:?} ({} water-quality parameters, {} species)",
            path,
            tables.water_quality.len(),
            tables.species.len()
        );

        Ok(tables)
    }

    /// Check every table against the load-time invariants
    pub fn validate(&self) -> Result<()> {
        check_table(&self.plastic)?;
        check_table(&self.coral)?;
        check_table(&self.oil_spill)?;
        check_table(&self.hab)?;
        check_table(&self.species)?;
        check_table(&self.water_quality)?;

        check_composite(&self.water_quality, &parameter::ALL, |r| r.importance)?;
        check_composite(&self.hab, &risk_factor::ALL, |r| r.sensitivity)?;

        if self.species.is_empty() {
            return Err(invalid(Domain::Species, "table has no species".to_string()));
        }

        let coral_total: f64 = self.coral.iter().map(|(_, r)| r.weight).sum();
        if coral_total <= 0.0 {
            return Err(invalid(
                Domain::Coral,
                "condition weights sum to zero".to_string(),
            ));
        }

        Ok(())
    }
}

fn invalid(domain: Domain, reason: String) -> ScoringError {
    ScoringError::InvalidTable { domain, reason }
}

fn check_table<R: CategoryRecord>(table: &CategoryTable<R>) -> Result<()> {
    let mut seen = HashSet::new();

    for (name, record) in table.iter() {
        if !seen.insert(name) {
            return Err(invalid(R::DOMAIN, format!("duplicate category '{}'", name)));
        }

        for (field, value) in record.unit_fields() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(invalid(
                    R::DOMAIN,
                    format!("'{}' {} = {} is outside [0, 1]", name, field, value),
                ));
            }
        }
    }

    Ok(())
}

/// Required inputs present, weights summing to 1.0
fn check_composite<R: CategoryRecord>(
    table: &CategoryTable<R>,
    required: &[&str],
    weight: impl Fn(&R) -> f64,
) -> Result<()> {
    let mut sum = 0.0;
    for name in required {
        let record = table
            .get(name)
            .map_err(|_| invalid(R::DOMAIN, format!("missing required entry '{}'", name)))?;
        sum += weight(record);
    }

    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(invalid(
            R::DOMAIN,
            format!("composite weights sum to {}, expected 1.0", sum),
        ));
    }

    Ok(())
}
