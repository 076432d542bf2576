//! Equivalent-rate conversion between compounding periods
//!
//! Two rates are equivalent when compounding each over one year yields the
//! same growth factor:
//!
//! `(1 + r_from)^n_from = (1 + r_to)^n_to`
//!
//! so `r_to = (1 + r_from)^(n_from / n_to) - 1`.

use super::period::RatePeriod;
use crate::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Convert a decimal rate between periods.
///
/// Returns `None` when the compounding base `1 + rate` is not positive or the
/// result is not finite. Used by the solver, where an undefined rate is an
/// unavailable field rather than an error.
pub fn equivalent_decimal(rate: f64, from: RatePeriod, to: RatePeriod) -> Option<f64> {
    let base = 1.0 + rate;
    if base.is_nan() || base <= 0.0 {
        return None;
    }
    if from == to {
        return Some(rate);
    }

    let exponent = from.periods_per_year() as f64 / to.periods_per_year() as f64;
    let converted = base.powf(exponent) - 1.0;
    converted.is_finite().then_some(converted)
}

/// Convert a percent rate quoted over `from` into its equivalent over `to`.
///
/// No rounding is applied. Converting a period to itself returns the input
/// unchanged.
pub fn convert(rate_pct: f64, from: RatePeriod, to: RatePeriod) -> CalcResult<f64> {
    if !rate_pct.is_finite() {
        return Err(CalcError::InvalidInput {
            field: "rate".into(),
            reason: format!("rate must be finite, got {}", rate_pct),
        });
    }
    if rate_pct <= -100.0 {
        log::warn!("Rejecting conversion of {}% {} -> {}", rate_pct, from, to);
        return Err(CalcError::RateOutOfDomain { rate: rate_pct });
    }
    if from == to {
        return Ok(rate_pct);
    }

    equivalent_decimal(rate_pct / 100.0, from, to)
        .map(|rate| rate * 100.0)
        .ok_or(CalcError::RateOutOfDomain { rate: rate_pct })
}

/// One row of an equivalent-rate table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquivalentRate {
    pub period: RatePeriod,
    /// Rate in percent per `period`
    pub rate_pct: f64,
}

/// Equivalent rate of `rate_pct` (quoted over `from`) in every period
pub fn convert_all(rate_pct: f64, from: RatePeriod) -> CalcResult<Vec<EquivalentRate>> {
    RatePeriod::ALL
        .iter()
        .map(|&period| {
            convert(rate_pct, from, period).map(|rate_pct| EquivalentRate { period, rate_pct })
        })
        .collect()
}
