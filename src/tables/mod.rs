//! Category tables
//!
//! Static configuration for every analysis domain: an ordered mapping from
//! category name to a typed attribute record. Tables are built once (from the
//! built-in data or a JSON file), validated, and never mutated afterwards.
//!
//! - `records`: typed record per domain and the `CategoryAttributes` tag
//! - `builtin`: compiled-in default tables
//! - `loader`: JSON loading and load-time validation

mod builtin;
pub mod loader;
pub mod records;

pub use loader::TableConfig;
pub use records::*;

use crate::error::{Result, ScoringError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Water-quality parameter names used by the composite scorer
pub mod parameter {
    pub const DISSOLVED_OXYGEN: &str = "Dissolved Oxygen";
    pub const TURBIDITY: &str = "Turbidity";
    pub const MICROPLASTIC_COUNT: &str = "Microplastic Count";
    pub const CHEMICAL_POLLUTANTS: &str = "Chemical Pollutants";

    pub const ALL: [&str; 4] = [DISSOLVED_OXYGEN, TURBIDITY, MICROPLASTIC_COUNT, CHEMICAL_POLLUTANTS];
}

/// HAB risk factor names used by the composite scorer
pub mod risk_factor {
    pub const WATER_TEMPERATURE: &str = "Water Temperature";
    pub const NUTRIENT_LEVELS: &str = "Nutrient Levels";
    pub const SALINITY: &str = "Salinity";
    pub const PH_LEVELS: &str = "pH Levels";

    pub const ALL: [&str; 4] = [WATER_TEMPERATURE, NUTRIENT_LEVELS, SALINITY, PH_LEVELS];
}

/// Analysis domain, one table each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Plastic,
    Coral,
    OilSpill,
    Hab,
    Species,
    WaterQuality,
}

impl Domain {
    pub const ALL: [Domain; 6] = [
        Domain::Plastic,
        Domain::Coral,
        Domain::OilSpill,
        Domain::Hab,
        Domain::Species,
        Domain::WaterQuality,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Plastic => "plastic",
            Domain::Coral => "coral",
            Domain::OilSpill => "oil_spill",
            Domain::Hab => "hab",
            Domain::Species => "species",
            Domain::WaterQuality => "water_quality",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named category and its attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntry<R> {
    pub name: String,
    #[serde(flatten)]
    pub record: R,
}

/// Ordered, immutable mapping from category name to record
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable<R> {
    entries: Vec<CategoryEntry<R>>,
}

impl<R: CategoryRecord> CategoryTable<R> {
    pub(crate) fn from_entries(entries: Vec<CategoryEntry<R>>) -> Self {
        Self { entries }
    }

    fn from_static(rows: &[(&str, R)]) -> Self {
        Self {
            entries: rows
                .iter()
                .map(|(name, record)| CategoryEntry {
                    name: name.to_string(),
                    record: *record,
                })
                .collect(),
        }
    }

    pub fn domain(&self) -> Domain {
        R::DOMAIN
    }

    /// Look up a category, failing with `UnknownCategory` when absent
    pub fn get(&self, category: &str) -> Result<&R> {
        self.entries
            .iter()
            .find(|e| e.name == category)
            .map(|e| &e.record)
            .ok_or_else(|| ScoringError::UnknownCategory {
                domain: R::DOMAIN,
                category: category.to_string(),
            })
    }

    pub fn contains(&self, category: &str) -> bool {
        self.entries.iter().any(|e| e.name == category)
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &R)> {
        self.entries.iter().map(|e| (e.name.as_str(), &e.record))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> &[CategoryEntry<R>] {
        &self.entries
    }
}

/// The full set of domain tables used by one scorer
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTables {
    pub(crate) plastic: CategoryTable<PlasticRecord>,
    pub(crate) coral: CategoryTable<CoralRecord>,
    pub(crate) oil_spill: CategoryTable<SpillRecord>,
    pub(crate) hab: CategoryTable<HabFactorRecord>,
    pub(crate) species: CategoryTable<SpeciesRecord>,
    pub(crate) water_quality: CategoryTable<WaterQualityRecord>,
}

impl CategoryTables {
    /// Tables compiled into the crate
    pub fn builtin() -> Self {
        Self {
            plastic: CategoryTable::from_static(builtin::PLASTIC),
            coral: CategoryTable::from_static(builtin::CORAL),
            oil_spill: CategoryTable::from_static(builtin::OIL_SPILL),
            hab: CategoryTable::from_static(builtin::HAB),
            species: CategoryTable::from_static(builtin::SPECIES),
            water_quality: CategoryTable::from_static(builtin::WATER_QUALITY),
        }
    }

    /// Read-only lookup across domains
    pub fn get(&self, domain: Domain, category: &str) -> Result<CategoryAttributes> {
        match domain {
            Domain::Plastic => self.plastic.get(category).map(|r| r.into_attributes()),
            Domain::Coral => self.coral.get(category).map(|r| r.into_attributes()),
            Domain::OilSpill => self.oil_spill.get(category).map(|r| r.into_attributes()),
            Domain::Hab => self.hab.get(category).map(|r| r.into_attributes()),
            Domain::Species => self.species.get(category).map(|r| r.into_attributes()),
            Domain::WaterQuality => self.water_quality.get(category).map(|r| r.into_attributes()),
        }
    }

    pub fn plastic(&self) -> &CategoryTable<PlasticRecord> {
        &self.plastic
    }

    pub fn coral(&self) -> &CategoryTable<CoralRecord> {
        &self.coral
    }

    pub fn oil_spill(&self) -> &CategoryTable<SpillRecord> {
        &self.oil_spill
    }

    pub fn hab(&self) -> &CategoryTable<HabFactorRecord> {
        &self.hab
    }

    pub fn species(&self) -> &CategoryTable<SpeciesRecord> {
        &self.species
    }

    pub fn water_quality(&self) -> &CategoryTable<WaterQualityRecord> {
        &self.water_quality
    }
}

impl Default for CategoryTables {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_category() {
        let tables = CategoryTables::builtin();

        match tables.get(Domain::Plastic, "Fishing Nets").unwrap() {
            CategoryAttributes::Plastic(rec) => {
                assert_eq!(rec.detection_weight, 0.2);
                assert_eq!(rec.ecological_impact, 0.7);
            }
            other => panic!("wrong domain: {:?}", other),
        }

        let attrs = tables.get(Domain::WaterQuality, parameter::TURBIDITY).unwrap();
        assert_eq!(attrs.domain(), Domain::WaterQuality);

        assert!(tables.coral().contains("Early Bleaching"));
        assert!(!tables.coral().contains("early bleaching"));
    }

    #[test]
    fn test_lookup_unknown_category() {
        let tables = CategoryTables::builtin();
        let err = tables.get(Domain::Coral, "Microplastics").unwrap_err();
        assert_eq!(
            err,
            ScoringError::UnknownCategory {
                domain: Domain::Coral,
                category: "Microplastics".to_string(),
            }
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let tables = CategoryTables::builtin();
        assert!(tables.get(Domain::Species, "fish").is_err());
        assert!(tables.get(Domain::Species, "Fish").is_ok());
    }

    #[test]
    fn test_declaration_order_preserved() {
        let tables = CategoryTables::builtin();
        let names: Vec<&str> = tables.species().names().collect();
        assert_eq!(names, vec!["Fish", "Mammals", "Invertebrates", "Plant Life"]);

        let names: Vec<&str> = tables.water_quality().names().collect();
        assert_eq!(names, parameter::ALL.to_vec());
    }

    #[test]
    fn test_every_domain_has_builtin_entries() {
        let tables = CategoryTables::builtin();
        assert_eq!(tables.plastic().len(), 4);
        assert_eq!(tables.coral().len(), 4);
        assert_eq!(tables.oil_spill().len(), 4);
        assert_eq!(tables.hab().len(), 4);
        assert_eq!(tables.species().len(), 4);
        assert_eq!(tables.water_quality().len(), 4);
        assert_eq!(tables.hab().domain(), Domain::Hab);
    }

    #[test]
    fn test_builtin_tables_validate() {
        CategoryTables::builtin().validate().unwrap();
    }
}
