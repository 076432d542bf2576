//! Solver output structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four solvable quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    PresentValue,
    FutureValue,
    AnnualRate,
    BusinessDays,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::PresentValue => "present value",
            Quantity::FutureValue => "future value",
            Quantity::AnnualRate => "annual rate",
            Quantity::BusinessDays => "business days",
        };
        f.write_str(name)
    }
}

/// How a solve call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "quantity", rename_all = "snake_case")]
pub enum SolveOutcome {
    /// The missing quantity was computed
    Solved(Quantity),
    /// All four quantities were supplied; nothing to compute
    FullyDetermined,
    /// Too few quantities to pick a branch
    UnderDetermined,
    /// The branch for this quantity hit an undefined operation
    DomainInvalid(Quantity),
}

impl SolveOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }
}

/// Result of a solve call.
///
/// Every field is `None` when unavailable. Rates are in percent, values in
/// currency units, days possibly fractional when solved for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentResult {
    pub present_value: Option<f64>,
    pub future_value: Option<f64>,
    pub annual_rate_pct: Option<f64>,
    pub monthly_rate_pct: Option<f64>,
    pub daily_rate_pct: Option<f64>,
    pub business_days: Option<f64>,
    pub outcome: SolveOutcome,
}

impl InvestmentResult {
    pub(crate) fn empty() -> Self {
        Self {
            present_value: None,
            future_value: None,
            annual_rate_pct: None,
            monthly_rate_pct: None,
            daily_rate_pct: None,
            business_days: None,
            outcome: SolveOutcome::UnderDetermined,
        }
    }

    /// Daily rate as a decimal (0.000284 rather than 0.0284%)
    pub fn daily_rate_decimal(&self) -> Option<f64> {
        self.daily_rate_pct.map(|pct| pct / 100.0)
    }

    /// The quantity a solve was asked for, whether or not it was found
    pub fn target(&self) -> Option<Quantity> {
        match self.outcome {
            SolveOutcome::Solved(q) | SolveOutcome::DomainInvalid(q) => Some(q),
            SolveOutcome::FullyDetermined | SolveOutcome::UnderDetermined => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&SolveOutcome::Solved(Quantity::AnnualRate)).unwrap();
        assert_eq!(json, r#"{"status":"solved","quantity":"annual_rate"}"#);

        let json = serde_json::to_string(&SolveOutcome::UnderDetermined).unwrap();
        assert_eq!(json, r#"{"status":"under_determined"}"#);
    }

    #[test]
    fn test_unavailable_serializes_as_null() {
        let result = InvestmentResult::empty();
        let value = serde_json::to_value(result).unwrap();
        assert!(value["present_value"].is_null());
        assert!(result.daily_rate_decimal().is_none());
        assert!(result.target().is_none());
    }
}
