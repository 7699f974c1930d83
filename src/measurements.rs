//! Measurement records and their declared input domains
//!
//! Input domains describe what a data-entry surface offers (slider bounds and
//! starting values). The scoring functions never clamp to them: a value outside
//! its domain is scored like any other.

use serde::{Deserialize, Serialize};

/// Declared input interval and default for one measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputDomain {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl InputDomain {
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

pub const DISSOLVED_OXYGEN: InputDomain = InputDomain {
    label: "Dissolved Oxygen (mg/L)",
    min: 0.0,
    max: 10.0,
    default: 7.0,
};
pub const TURBIDITY: InputDomain = InputDomain {
    label: "Turbidity (NTU)",
    min: 0.0,
    max: 20.0,
    default: 3.0,
};
pub const MICROPLASTIC: InputDomain = InputDomain {
    label: "Microplastic Concentration (particles/L)",
    min: 0.0,
    max: 50.0,
    default: 5.0,
};
pub const CHEMICAL_POLLUTION: InputDomain = InputDomain {
    label: "Chemical Pollutant Index",
    min: 0.0,
    max: 10.0,
    default: 1.0,
};

pub const WATER_TEMPERATURE: InputDomain = InputDomain {
    label: "Water Temperature (°C)",
    min: 20.0,
    max: 35.0,
    default: 25.0,
};
pub const NUTRIENT_LEVELS: InputDomain = InputDomain {
    label: "Nutrient Levels",
    min: 0.0,
    max: 10.0,
    default: 2.0,
};
pub const SALINITY: InputDomain = InputDomain {
    label: "Salinity",
    min: 30.0,
    max: 40.0,
    default: 35.0,
};
pub const PH_LEVEL: InputDomain = InputDomain {
    label: "pH Level",
    min: 6.0,
    max: 9.0,
    default: 8.0,
};

/// Water chemistry inputs for the water quality composite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterSample {
    pub dissolved_oxygen: f64,
    pub turbidity: f64,
    pub microplastic: f64,
    pub chemical_pollution: f64,
}

impl WaterSample {
    /// Names of measurements lying outside their declared input domain
    pub fn out_of_domain(&self) -> Vec<&'static str> {
        [
            (DISSOLVED_OXYGEN, self.dissolved_oxygen),
            (TURBIDITY, self.turbidity),
            (MICROPLASTIC, self.microplastic),
            (CHEMICAL_POLLUTION, self.chemical_pollution),
        ]
        .into_iter()
        .filter(|(domain, value)| !domain.contains(*value))
        .map(|(domain, _)| domain.label)
        .collect()
    }
}

impl Default for WaterSample {
    fn default() -> Self {
        Self {
            dissolved_oxygen: DISSOLVED_OXYGEN.default,
            turbidity: TURBIDITY.default,
            microplastic: MICROPLASTIC.default,
            chemical_pollution: CHEMICAL_POLLUTION.default,
        }
    }
}

/// Environmental inputs for the HAB risk composite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabConditions {
    pub water_temperature: f64,
    pub nutrient_levels: f64,
    pub salinity: f64,
    pub ph: f64,
}

impl HabConditions {
    pub fn out_of_domain(&self) -> Vec<&'static str> {
        [
            (WATER_TEMPERATURE, self.water_temperature),
            (NUTRIENT_LEVELS, self.nutrient_levels),
            (SALINITY, self.salinity),
            (PH_LEVEL, self.ph),
        ]
        .into_iter()
        .filter(|(domain, value)| !domain.contains(*value))
        .map(|(domain, _)| domain.label)
        .collect()
    }
}

impl Default for HabConditions {
    fn default() -> Self {
        Self {
            water_temperature: WATER_TEMPERATURE.default,
            nutrient_levels: NUTRIENT_LEVELS.default,
            salinity: SALINITY.default,
            ph: PH_LEVEL.default,
        }
    }
}
