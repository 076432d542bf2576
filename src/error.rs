//! Error types for contract violations
//!
//! Ordinary under-determination and domain edge cases are never errors: the
//! solver reports them as unavailable fields. `CalcError` covers the inputs a
//! validated collaborator should never send.

use thiserror::Error;

/// Result alias used across the crate
pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Debug, Error)]
pub enum CalcError {
    /// Rate at or below -100%: compounding base `1 + rate` is not positive
    #[error("Rate {rate}% is out of domain: must be greater than -100%")]
    RateOutOfDomain { rate: f64 },

    #[error("Unknown rate period: {0}")]
    UnknownPeriod(String),

    #[error("Day count must be non-negative, got {0}")]
    NegativeDays(i64),

    #[error("Allocation weights sum to {total}%, expected 100%")]
    AllocationSum { total: u64 },

    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
