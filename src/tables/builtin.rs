//! Built-in category tables
//!
//! Compiled into the crate so the engine works without a configuration file.
//! `config/marine_tables.json` is a copy of these values in loader format.

use super::records::*;
use super::{parameter, risk_factor};
use crate::utils::OptimalRange;

// ============================================================================
// POLLUTANT CATEGORIES
// ============================================================================

pub(crate) static PLASTIC: &[(&str, PlasticRecord)] = &[
    ("Microplastics", PlasticRecord { detection_weight: 0.3, ecological_impact: 0.8 }),
    ("Fishing Nets", PlasticRecord { detection_weight: 0.2, ecological_impact: 0.7 }),
    ("Plastic Bottles", PlasticRecord { detection_weight: 0.25, ecological_impact: 0.6 }),
    ("Industrial Plastic Waste", PlasticRecord { detection_weight: 0.15, ecological_impact: 0.9 }),
];

pub(crate) static OIL_SPILL: &[(&str, SpillRecord)] = &[
    ("Minor Spill", SpillRecord { detection_weight: 0.4, ecological_impact: 0.3 }),
    ("Moderate Spill", SpillRecord { detection_weight: 0.3, ecological_impact: 0.6 }),
    ("Major Spill", SpillRecord { detection_weight: 0.2, ecological_impact: 0.9 }),
    ("Catastrophic Spill", SpillRecord { detection_weight: 0.1, ecological_impact: 1.0 }),
];

// ============================================================================
// HABITAT CONDITION
// ============================================================================

pub(crate) static CORAL: &[(&str, CoralRecord)] = &[
    ("Healthy Coral", CoralRecord { weight: 0.4, recovery_potential: 0.9 }),
    ("Early Bleaching", CoralRecord { weight: 0.3, recovery_potential: 0.6 }),
    ("Advanced Bleaching", CoralRecord { weight: 0.2, recovery_potential: 0.2 }),
    ("Coral Disease", CoralRecord { weight: 0.1, recovery_potential: 0.1 }),
];

pub(crate) static SPECIES: &[(&str, SpeciesRecord)] = &[
    ("Fish", SpeciesRecord { health_index: 0.7, trend: Trend::Declining }),
    ("Mammals", SpeciesRecord { health_index: 0.6, trend: Trend::Stable }),
    ("Invertebrates", SpeciesRecord { health_index: 0.5, trend: Trend::Declining }),
    ("Plant Life", SpeciesRecord { health_index: 0.4, trend: Trend::Critical }),
];

// ============================================================================
// COMPOSITE INPUTS (weights sum to 1.0)
// ============================================================================

pub(crate) static HAB: &[(&str, HabFactorRecord)] = &[
    (risk_factor::WATER_TEMPERATURE, HabFactorRecord { sensitivity: 0.3 }),
    (risk_factor::NUTRIENT_LEVELS, HabFactorRecord { sensitivity: 0.3 }),
    (risk_factor::SALINITY, HabFactorRecord { sensitivity: 0.2 }),
    (risk_factor::PH_LEVELS, HabFactorRecord { sensitivity: 0.2 }),
];

pub(crate) static WATER_QUALITY: &[(&str, WaterQualityRecord)] = &[
    (parameter::DISSOLVED_OXYGEN, WaterQualityRecord {
        optimal_range: OptimalRange::from_bounds(6.5, 8.5),
        importance: 0.3,
    }),
    (parameter::TURBIDITY, WaterQualityRecord {
        optimal_range: OptimalRange::from_bounds(0.0, 5.0),
        importance: 0.2,
    }),
    (parameter::MICROPLASTIC_COUNT, WaterQualityRecord {
        optimal_range: OptimalRange::from_bounds(0.0, 10.0),
        importance: 0.3,
    }),
    (parameter::CHEMICAL_POLLUTANTS, WaterQualityRecord {
        optimal_range: OptimalRange::from_bounds(0.0, 2.0),
        importance: 0.2,
    }),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(PLASTIC.len(), 4);
        assert_eq!(OIL_SPILL.len(), 4);
        assert_eq!(CORAL.len(), 4);
        assert_eq!(SPECIES.len(), 4);
        assert_eq!(HAB.len(), 4);
        assert_eq!(WATER_QUALITY.len(), 4);
    }

    #[test]
    fn test_builtin_ranges_are_well_formed() {
        for (name, rec) in WATER_QUALITY {
            let r = rec.optimal_range;
            assert!(
                OptimalRange::new(r.min(), r.max()).is_ok(),
                "{} has malformed range",
                name
            );
        }
    }
}
