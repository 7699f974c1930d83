//! Normalization Utilities
//!
//! Converts a raw measurement into a [0,1] score against the optimal range of
//! its water-quality parameter.
//!
//! Inside the range the score is 1.0. Outside it the score degrades linearly,
//! with the penalty scaled by the bound that was crossed (not by the range
//! width):
//!
//! ```text
//! value < min:  1 - (min - value) / min
//! value > max:  1 - (value - max) / max
//! ```
//!
//! A small lower bound therefore punishes deficits much harder than a large
//! one. This scaling is kept exactly as published in the scoring tables.

use crate::error::{Result, ScoringError};
use serde::{Deserialize, Serialize};

/// Interval of a measurement considered fully healthy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct OptimalRange {
    min: f64,
    max: f64,
}

impl OptimalRange {
    /// Build a range, rejecting non-finite or negative bounds and `min > max`
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(ScoringError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Const constructor for the built-in tables. Bounds are trusted.
    pub(crate) const fn from_bounds(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl TryFrom<(f64, f64)> for OptimalRange {
    type Error = ScoringError;

    fn try_from((min, max): (f64, f64)) -> Result<Self> {
        Self::new(min, max)
    }
}

impl From<OptimalRange> for (f64, f64) {
    fn from(range: OptimalRange) -> Self {
        (range.min, range.max)
    }
}

/// Score one measurement against its optimal range
///
/// Algorithm:
/// 1. `min <= value <= max` → 1.0
/// 2. below the range → `max(0, 1 - (min - value) / min)`
/// 3. above the range → `max(0, 1 - (value - max) / max)`
///
/// Edge cases:
/// - Out of range on a side whose bound is 0 → `DegenerateRange`
/// - NaN and infinite values score 0.0
pub fn normalize(value: f64, range: OptimalRange) -> Result<f64> {
    if !value.is_finite() {
        return Ok(0.0);
    }
    if range.contains(value) {
        return Ok(1.0);
    }

    let (bound, deficit) = if value < range.min {
        (range.min, range.min - value)
    } else {
        (range.max, value - range.max)
    };

    if bound == 0.0 {
        return Err(ScoringError::DegenerateRange {
            value,
            min: range.min,
            max: range.max,
        });
    }

    Ok((1.0 - deficit / bound).max(0.0))
}

/// `normalize` with the zero-bound fallback applied: a degenerate range scores 0.0
pub fn normalize_or_zero(value: f64, range: OptimalRange) -> f64 {
    normalize(value, range).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn range(min: f64, max: f64) -> OptimalRange {
        OptimalRange::new(min, max).unwrap()
    }

    #[test]
    fn test_inside_range_scores_one() {
        let r = range(6.5, 8.5);
        for v in [6.5, 7.0, 7.77, 8.5] {
            assert_eq!(normalize(v, r).unwrap(), 1.0, "value {}", v);
        }
    }

    #[test]
    fn test_below_range_scales_by_min() {
        // 1 - (6.5 - 5.0) / 6.5
        let score = normalize(5.0, range(6.5, 8.5)).unwrap();
        assert_relative_eq!(score, 1.0 - 1.5 / 6.5, epsilon = 1e-12);

        // Deficit equal to min → 0
        assert_eq!(normalize(0.0, range(6.5, 8.5)).unwrap(), 0.0);
    }

    #[test]
    fn test_above_range_scales_by_max() {
        // 1 - (7.5 - 5) / 5 = 0.5
        let score = normalize(7.5, range(0.0, 5.0)).unwrap();
        assert_relative_eq!(score, 0.5, epsilon = 1e-12);

        // Twice the upper bound or more → floor at 0
        assert_eq!(normalize(10.0, range(0.0, 5.0)).unwrap(), 0.0);
        assert_eq!(normalize(40.0, range(0.0, 5.0)).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_bound_is_degenerate() {
        let err = normalize(-1.0, range(0.0, 5.0)).unwrap_err();
        assert!(matches!(err, ScoringError::DegenerateRange { .. }));

        let err = normalize(0.5, range(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, ScoringError::DegenerateRange { .. }));

        assert_eq!(normalize_or_zero(-1.0, range(0.0, 5.0)), 0.0);
    }

    #[test]
    fn test_non_finite_values() {
        let r = range(6.5, 8.5);
        assert_eq!(normalize(f64::NAN, r).unwrap(), 0.0);
        assert_eq!(normalize(f64::INFINITY, r).unwrap(), 0.0);
        assert_eq!(normalize(f64::NEG_INFINITY, r).unwrap(), 0.0);
    }

    #[test]
    fn test_negative_bounds_rejected() {
        // Out-of-range values would otherwise score above an in-range one
        assert!(matches!(
            OptimalRange::new(-5.0, -1.0),
            Err(ScoringError::InvalidRange { .. })
        ));
        assert!(OptimalRange::new(-1.0, 2.0).is_err());
        assert!(serde_json::from_str::<OptimalRange>("[-5, -1]").is_err());
    }

    #[test]
    fn test_score_bounded_for_nonzero_bounds() {
        let r = range(6.5, 8.5);
        let mut v = -50.0;
        while v <= 50.0 {
            let s = normalize(v, r).unwrap();
            assert!((0.0..=1.0).contains(&s), "value {} scored {}", v, s);
            v += 0.25;
        }
    }

    #[test]
    fn test_range_validation() {
        assert!(OptimalRange::new(2.0, 1.0).is_err());
        assert!(OptimalRange::new(f64::NAN, 1.0).is_err());
        assert!(OptimalRange::new(1.0, f64::INFINITY).is_err());
        assert!(OptimalRange::new(3.0, 3.0).is_ok());
    }

    #[test]
    fn test_range_deserializes_from_pair() {
        let r: OptimalRange = serde_json::from_str("[6.5, 8.5]").unwrap();
        assert_eq!((r.min(), r.max()), (6.5, 8.5));

        assert!(serde_json::from_str::<OptimalRange>("[8.5, 6.5]").is_err());
    }
}
