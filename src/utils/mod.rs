//! Utility modules for marine scoring
//!
//! - Normalization: optimal-range scoring of single measurements

pub mod normalization;

// Re-export commonly used types
pub use normalization::{normalize, normalize_or_zero, OptimalRange};
