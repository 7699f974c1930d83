//! WATER QUALITY COMPOSITE
//!
//! Normalizes four water chemistry measurements against their optimal ranges
//! and combines them with fixed weights:
//!
//! | Parameter           | Range       | Weight |
//! |---------------------|-------------|--------|
//! | Dissolved Oxygen    | 6.5 – 8.5   | 0.3    |
//! | Turbidity           | 0 – 5       | 0.2    |
//! | Microplastic Count  | 0 – 10      | 0.3    |
//! | Chemical Pollutants | 0 – 2       | 0.2    |
//!
//! Result lies in [0,1].

use crate::error::Result;
use crate::measurements::WaterSample;
use crate::tables::{parameter, CategoryTable, WaterQualityRecord};
use crate::utils::{normalize, OptimalRange};
use serde::Serialize;

/// Optimal range and composite weight of one parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterSpec {
    pub range: OptimalRange,
    pub weight: f64,
}

/// The four parameter specs feeding the composite
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaterQualityProfile {
    pub dissolved_oxygen: ParameterSpec,
    pub turbidity: ParameterSpec,
    pub microplastic: ParameterSpec,
    pub chemical: ParameterSpec,
}

impl WaterQualityProfile {
    pub const BUILTIN: Self = Self {
        dissolved_oxygen: ParameterSpec { range: OptimalRange::from_bounds(6.5, 8.5), weight: 0.3 },
        turbidity: ParameterSpec { range: OptimalRange::from_bounds(0.0, 5.0), weight: 0.2 },
        microplastic: ParameterSpec { range: OptimalRange::from_bounds(0.0, 10.0), weight: 0.3 },
        chemical: ParameterSpec { range: OptimalRange::from_bounds(0.0, 2.0), weight: 0.2 },
    };

    /// Read ranges and weights from a water-quality table
    pub fn from_table(table: &CategoryTable<WaterQualityRecord>) -> Result<Self> {
        let spec = |name: &str| -> Result<ParameterSpec> {
            let rec = table.get(name)?;
            Ok(ParameterSpec {
                range: rec.optimal_range,
                weight: rec.importance,
            })
        };

        Ok(Self {
            dissolved_oxygen: spec(parameter::DISSOLVED_OXYGEN)?,
            turbidity: spec(parameter::TURBIDITY)?,
            microplastic: spec(parameter::MICROPLASTIC_COUNT)?,
            chemical: spec(parameter::CHEMICAL_POLLUTANTS)?,
        })
    }

    /// Score a sample, keeping the per-parameter breakdown
    pub fn score(&self, sample: &WaterSample) -> Result<WaterQualityResult> {
        let oxygen_score = normalize(sample.dissolved_oxygen, self.dissolved_oxygen.range)?;
        let turbidity_score = normalize(sample.turbidity, self.turbidity.range)?;
        let microplastic_score = normalize(sample.microplastic, self.microplastic.range)?;
        let chemical_score = normalize(sample.chemical_pollution, self.chemical.range)?;

        let score = oxygen_score * self.dissolved_oxygen.weight
            + turbidity_score * self.turbidity.weight
            + microplastic_score * self.microplastic.weight
            + chemical_score * self.chemical.weight;

        Ok(WaterQualityResult {
            score,
            oxygen_score,
            turbidity_score,
            microplastic_score,
            chemical_score,
        })
    }
}

impl Default for WaterQualityProfile {
    fn default() -> Self {
        Self::BUILTIN
    }
}

/// Result of the water quality composite
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaterQualityResult {
    /// Weighted composite (0-1, HIGH = GOOD)
    pub score: f64,
    pub oxygen_score: f64,
    pub turbidity_score: f64,
    pub microplastic_score: f64,
    pub chemical_score: f64,
}

/// Water quality composite with the built-in ranges and weights
pub fn water_quality_score(oxygen: f64, turbidity: f64, microplastic: f64, chemical: f64) -> Result<f64> {
    let sample = WaterSample {
        dissolved_oxygen: oxygen,
        turbidity,
        microplastic,
        chemical_pollution: chemical,
    };
    WaterQualityProfile::BUILTIN.score(&sample).map(|r| r.score)
}
