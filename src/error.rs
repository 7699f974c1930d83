//! Error kinds for the scoring engine
//!
//! Every fallible operation in the library returns `ScoringError`. File loading
//! and the CLI wrap it in `anyhow::Error` with context.

use crate::tables::Domain;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// Lookup of a category absent from its domain table
    #[error("unknown category '{category}' in {domain} table")]
    UnknownCategory { domain: Domain, category: String },

    /// An aggregate was requested over zero values
    #[error("empty input: {context}")]
    EmptyInput { context: &'static str },

    /// Value fell outside an optimal range on a side whose bound is zero,
    /// so the relative penalty is undefined
    #[error("degenerate optimal range ({min}, {max}): value {value} is outside a zero bound")]
    DegenerateRange { value: f64, min: f64, max: f64 },

    #[error("invalid optimal range ({min}, {max}): bounds must be finite with min <= max")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid {domain} table: {reason}")]
    InvalidTable { domain: Domain, reason: String },

    #[error("invalid thresholds: {reason}")]
    InvalidThresholds { reason: String },
}

pub type Result<T> = std::result::Result<T, ScoringError>;
