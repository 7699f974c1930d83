//! HARMFUL ALGAL BLOOM (HAB) RISK COMPOSITE
//!
//! Four differently shaped factors, each scaled by its sensitivity:
//!
//! ```text
//! temperature = temp / 35
//! nutrients   = nutrients / 10
//! salinity    = 1 - |salinity - 35| / 10
//! ph          = 1 - |ph - 8| / 2
//! ```
//!
//! The sum is deliberately left unclamped. Extreme salinity or pH drives
//! factors negative, and high temperature or nutrients pushes the total past
//! 1.0; classification only compares against cutoffs, so both ends still sort
//! into a bucket.

use crate::error::Result;
use crate::measurements::HabConditions;
use crate::tables::{risk_factor, CategoryTable, HabFactorRecord};
use serde::Serialize;

/// Temperature at which the temperature factor reaches 1.0 (°C)
pub const REFERENCE_TEMPERATURE: f64 = 35.0;
/// Nutrient level at which the nutrient factor reaches 1.0
pub const REFERENCE_NUTRIENTS: f64 = 10.0;
/// Salinity with the highest bloom factor
pub const REFERENCE_SALINITY: f64 = 35.0;
pub const SALINITY_SPAN: f64 = 10.0;
/// pH with the highest bloom factor
pub const REFERENCE_PH: f64 = 8.0;
pub const PH_SPAN: f64 = 2.0;

/// Sensitivity weights of the four risk factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HabSensitivities {
    pub temperature: f64,
    pub nutrients: f64,
    pub salinity: f64,
    pub ph: f64,
}

impl HabSensitivities {
    pub const BUILTIN: Self = Self {
        temperature: 0.3,
        nutrients: 0.3,
        salinity: 0.2,
        ph: 0.2,
    };

    pub fn from_table(table: &CategoryTable<HabFactorRecord>) -> Result<Self> {
        Ok(Self {
            temperature: table.get(risk_factor::WATER_TEMPERATURE)?.sensitivity,
            nutrients: table.get(risk_factor::NUTRIENT_LEVELS)?.sensitivity,
            salinity: table.get(risk_factor::SALINITY)?.sensitivity,
            ph: table.get(risk_factor::PH_LEVELS)?.sensitivity,
        })
    }

    /// Score conditions, keeping the unweighted factors
    pub fn score(&self, conditions: &HabConditions) -> HabRiskResult {
        let temperature_factor = conditions.water_temperature / REFERENCE_TEMPERATURE;
        let nutrient_factor = conditions.nutrient_levels / REFERENCE_NUTRIENTS;
        let salinity_factor = 1.0 - (conditions.salinity - REFERENCE_SALINITY).abs() / SALINITY_SPAN;
        let ph_factor = 1.0 - (conditions.ph - REFERENCE_PH).abs() / PH_SPAN;

        let score = self.temperature * temperature_factor
            + self.nutrients * nutrient_factor
            + self.salinity * salinity_factor
            + self.ph * ph_factor;

        HabRiskResult {
            score,
            temperature_factor,
            nutrient_factor,
            salinity_factor,
            ph_factor,
        }
    }
}

impl Default for HabSensitivities {
    fn default() -> Self {
        Self::BUILTIN
    }
}

/// Result of the HAB risk composite
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HabRiskResult {
    /// Weighted sum (HIGH = MORE RISK), not bounded to [0,1]
    pub score: f64,
    pub temperature_factor: f64,
    pub nutrient_factor: f64,
    pub salinity_factor: f64,
    pub ph_factor: f64,
}

/// HAB risk composite with the built-in sensitivities
pub fn hab_risk_score(temp: f64, nutrients: f64, salinity: f64, ph: f64) -> f64 {
    HabSensitivities::BUILTIN
        .score(&HabConditions {
            water_temperature: temp,
            nutrient_levels: nutrients,
            salinity,
            ph,
        })
        .score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::CategoryTables;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_conditions_score_one() {
        assert_relative_eq!(hab_risk_score(35.0, 10.0, 35.0, 8.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_default_conditions() {
        // 0.3*25/35 + 0.3*0.2 + 0.2 + 0.2
        let expected = 0.3 * 25.0 / 35.0 + 0.06 + 0.4;
        assert_relative_eq!(hab_risk_score(25.0, 2.0, 35.0, 8.0), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_not_clamped() {
        // Salinity 60 → factor -1.5, pH 2 → factor -2
        let low = hab_risk_score(0.0, 0.0, 60.0, 2.0);
        assert_relative_eq!(low, 0.2 * -1.5 + 0.2 * -2.0, epsilon = 1e-12);
        assert!(low < 0.0);

        let high = hab_risk_score(70.0, 30.0, 35.0, 8.0);
        assert_relative_eq!(high, 0.6 + 0.9 + 0.4, epsilon = 1e-12);
        assert!(high > 1.0);
    }

    #[test]
    fn test_factor_breakdown() {
        let result = HabSensitivities::BUILTIN.score(&HabConditions {
            water_temperature: 28.0,
            nutrient_levels: 5.0,
            salinity: 33.0,
            ph: 8.5,
        });
        assert_relative_eq!(result.temperature_factor, 0.8, epsilon = 1e-12);
        assert_relative_eq!(result.nutrient_factor, 0.5, epsilon = 1e-12);
        assert_relative_eq!(result.salinity_factor, 0.8, epsilon = 1e-12);
        assert_relative_eq!(result.ph_factor, 0.75, epsilon = 1e-12);
        assert_relative_eq!(result.score, 0.24 + 0.15 + 0.16 + 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_sensitivities_from_builtin_table() {
        let tables = CategoryTables::builtin();
        assert_eq!(
            HabSensitivities::from_table(tables.hab()).unwrap(),
            HabSensitivities::BUILTIN
        );
    }
}
