//! Compound-interest solver over {PV, FV, annual rate, business days}
//!
//! `FV = PV * (1 + daily)^days`, with `daily` the business-day equivalent of
//! the annual rate. Given three quantities the fourth is computed. Branches
//! are tried in a fixed order (present value, future value, business days,
//! annual rate) and the first whose inputs are all known wins.

use super::inputs::InvestmentInputs;
use super::result::{InvestmentResult, Quantity, SolveOutcome};
use crate::rates::{equivalent_decimal, RatePeriod};

/// Equivalent rates derived from one annual rate, as decimals
#[derive(Debug, Clone, Copy, PartialEq)]
struct EquivalentRates {
    annual: f64,
    monthly: f64,
    daily: f64,
}

impl EquivalentRates {
    fn from_annual(annual: f64) -> Option<Self> {
        Some(Self {
            annual,
            monthly: equivalent_decimal(annual, RatePeriod::Annual, RatePeriod::Monthly)?,
            daily: equivalent_decimal(annual, RatePeriod::Annual, RatePeriod::Daily)?,
        })
    }

    fn from_daily(daily: f64) -> Option<Self> {
        let annual = equivalent_decimal(daily, RatePeriod::Daily, RatePeriod::Annual)?;
        Some(Self {
            annual,
            monthly: equivalent_decimal(annual, RatePeriod::Annual, RatePeriod::Monthly)?,
            daily,
        })
    }
}

/// What the caller supplied for the rate
#[derive(Debug, Clone, Copy)]
enum RateState {
    Missing,
    Known(EquivalentRates),
    /// Given, but at or below -100%
    OutOfDomain,
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

fn outcome_for(quantity: Quantity, value: Option<f64>) -> SolveOutcome {
    match value {
        Some(_) => SolveOutcome::Solved(quantity),
        None => SolveOutcome::DomainInvalid(quantity),
    }
}

/// Business days for `pv` to grow into `fv` at `daily`
fn days_to_grow(pv: f64, fv: f64, daily: f64) -> Option<f64> {
    if pv <= 0.0 || fv <= 0.0 {
        return None;
    }
    let per_day = daily.ln_1p();
    if per_day == 0.0 {
        return None;
    }
    finite((fv / pv).ln() / per_day)
}

/// Rates implied by `pv` growing into `fv` over `days`
fn implied_rates(pv: f64, fv: f64, days: f64) -> Option<EquivalentRates> {
    if pv <= 0.0 || fv <= 0.0 || days <= 0.0 {
        return None;
    }
    let daily = finite((fv / pv).powf(1.0 / days) - 1.0)?;
    EquivalentRates::from_daily(daily)
}

fn set_rates(result: &mut InvestmentResult, rates: &EquivalentRates) {
    result.annual_rate_pct = finite(rates.annual * 100.0);
    result.monthly_rate_pct = finite(rates.monthly * 100.0);
    result.daily_rate_pct = finite(rates.daily * 100.0);
}

/// Solve for the missing quantity.
///
/// Never fails: anything that cannot be computed is left as `None`, with the
/// reason recorded in `InvestmentResult::outcome`.
pub fn solve(inputs: InvestmentInputs) -> InvestmentResult {
    let rate = match inputs.annual_rate {
        None => RateState::Missing,
        Some(pct) => match EquivalentRates::from_annual(pct / 100.0) {
            Some(rates) => RateState::Known(rates),
            None => {
                log::warn!("Annual rate {}% has no daily equivalent", pct);
                RateState::OutOfDomain
            }
        },
    };

    let mut result = InvestmentResult::empty();
    result.present_value = inputs.present_value;
    result.future_value = inputs.future_value;
    result.annual_rate_pct = inputs.annual_rate;
    result.business_days = inputs.business_days.map(f64::from);
    if let RateState::Known(rates) = &rate {
        set_rates(&mut result, rates);
    }

    let days = inputs.business_days.map(f64::from);

    result.outcome = match (inputs.present_value, inputs.future_value, days, rate) {
        (None, Some(fv), Some(n), RateState::Known(r)) => {
            result.present_value = finite(fv / (1.0 + r.daily).powf(n));
            outcome_for(Quantity::PresentValue, result.present_value)
        }
        (Some(pv), None, Some(n), RateState::Known(r)) => {
            result.future_value = finite(pv * (1.0 + r.daily).powf(n));
            outcome_for(Quantity::FutureValue, result.future_value)
        }
        (Some(pv), Some(fv), None, RateState::Known(r)) => {
            result.business_days = days_to_grow(pv, fv, r.daily);
            outcome_for(Quantity::BusinessDays, result.business_days)
        }
        (Some(pv), Some(fv), Some(n), RateState::Missing) => match implied_rates(pv, fv, n) {
            Some(rates) => {
                set_rates(&mut result, &rates);
                SolveOutcome::Solved(Quantity::AnnualRate)
            }
            None => SolveOutcome::DomainInvalid(Quantity::AnnualRate),
        },
        (Some(_), Some(_), Some(_), RateState::Known(_)) => SolveOutcome::FullyDetermined,
        (_, _, _, RateState::OutOfDomain) => SolveOutcome::DomainInvalid(Quantity::AnnualRate),
        _ => SolveOutcome::UnderDetermined,
    };

    match result.outcome {
        SolveOutcome::DomainInvalid(q) => log::warn!("Cannot compute {} from {:?}", q, inputs),
        outcome => log::debug!("Solve {:?} -> {:?}", inputs, outcome),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn inputs(pv: Option<f64>, fv: Option<f64>, rate: Option<f64>, days: Option<u32>) -> InvestmentInputs {
        InvestmentInputs::new(pv, fv, rate, days)
    }

    #[test]
    fn test_solve_annual_rate() {
        let result = solve(inputs(Some(13000.0), Some(15000.0), None, Some(252)));

        assert_eq!(result.outcome, SolveOutcome::Solved(Quantity::AnnualRate));
        // One year of business days: annual rate is the plain growth
        assert_relative_eq!(result.annual_rate_pct.unwrap(), (15000.0 / 13000.0 - 1.0) * 100.0, max_relative = 1e-10);
        assert_abs_diff_eq!(result.annual_rate_pct.unwrap(), 15.384615, epsilon = 1e-6);
        assert_abs_diff_eq!(result.daily_rate_pct.unwrap(), 0.0568022, epsilon = 1e-7);
        assert_abs_diff_eq!(result.monthly_rate_pct.unwrap(), 1.199646, epsilon = 1e-6);
        assert_eq!(result.business_days, Some(252.0));
    }

    #[test]
    fn test_solve_future_value() {
        let result = solve(inputs(Some(13000.0), None, Some(7.33), Some(252)));

        assert_eq!(result.outcome, SolveOutcome::Solved(Quantity::FutureValue));
        assert_relative_eq!(result.future_value.unwrap(), 13952.9, max_relative = 1e-10);
        assert_abs_diff_eq!(result.daily_rate_pct.unwrap(), 0.0280746, epsilon = 1e-7);
        assert_abs_diff_eq!(result.monthly_rate_pct.unwrap(), 0.591224, epsilon = 1e-6);
    }

    #[test]
    fn test_solve_present_value() {
        let result = solve(inputs(None, Some(15000.0), Some(7.33), Some(252)));

        assert_eq!(result.outcome, SolveOutcome::Solved(Quantity::PresentValue));
        assert_relative_eq!(result.present_value.unwrap(), 15000.0 / 1.0733, max_relative = 1e-10);
    }

    #[test]
    fn test_solve_business_days() {
        let result = solve(inputs(Some(13000.0), Some(15000.0), Some(7.33), None));

        assert_eq!(result.outcome, SolveOutcome::Solved(Quantity::BusinessDays));
        assert_abs_diff_eq!(result.business_days.unwrap(), 509.788306, epsilon = 1e-5);
        // Annual rate stays the caller's
        assert_eq!(result.annual_rate_pct, Some(7.33));
    }

    #[test]
    fn test_round_trip_present_value() {
        for &(pv, rate, days) in &[(13000.0, 7.33, 252), (1.0, 0.0, 10), (250_000.0, 13.75, 1260), (500.0, -4.0, 63)] {
            let forward = solve(inputs(Some(pv), None, Some(rate), Some(days)));
            let back = solve(inputs(None, forward.future_value, Some(rate), Some(days)));
            assert_relative_eq!(back.present_value.unwrap(), pv, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_zero_days_keeps_value() {
        let result = solve(inputs(Some(13000.0), None, Some(7.33), Some(0)));
        assert_eq!(result.future_value, Some(13000.0));
    }

    #[test]
    fn test_priority_days_before_rate() {
        // PV, FV and rate known: days is the only candidate, never the rate
        let result = solve(inputs(Some(100.0), Some(110.0), Some(10.0), None));
        assert_eq!(result.outcome, SolveOutcome::Solved(Quantity::BusinessDays));
        assert_abs_diff_eq!(result.business_days.unwrap(), 252.0, epsilon = 1e-9);
        assert_eq!(result.annual_rate_pct, Some(10.0));
    }

    #[test]
    fn test_priority_present_value_first() {
        // PV and days both missing: PV branch needs days, so nothing fires
        let result = solve(inputs(None, Some(110.0), Some(10.0), None));
        assert_eq!(result.outcome, SolveOutcome::UnderDetermined);
        assert!(result.present_value.is_none());
        assert!(result.business_days.is_none());
        // Rate equivalents are still derived from the given annual rate
        assert!(result.daily_rate_pct.is_some());
    }

    #[test]
    fn test_under_determined() {
        let result = solve(inputs(Some(100.0), None, None, None));
        assert_eq!(result.outcome, SolveOutcome::UnderDetermined);
        assert!(result.future_value.is_none());
        assert!(result.annual_rate_pct.is_none());
        assert!(result.daily_rate_pct.is_none());

        let result = solve(InvestmentInputs::default());
        assert_eq!(result.outcome, SolveOutcome::UnderDetermined);
    }

    #[test]
    fn test_fully_determined_echoes_inputs() {
        let result = solve(inputs(Some(100.0), Some(110.0), Some(10.0), Some(252)));
        assert_eq!(result.outcome, SolveOutcome::FullyDetermined);
        assert_eq!(result.present_value, Some(100.0));
        assert_eq!(result.future_value, Some(110.0));
    }

    #[test]
    fn test_non_positive_present_value_days_unavailable() {
        for pv in [0.0, -100.0] {
            let result = solve(inputs(Some(pv), Some(-110.0), Some(10.0), None));
            assert_eq!(result.outcome, SolveOutcome::DomainInvalid(Quantity::BusinessDays));
            assert!(result.business_days.is_none());
        }
    }

    #[test]
    fn test_zero_rate_days_unavailable() {
        let result = solve(inputs(Some(100.0), Some(110.0), Some(0.0), None));
        assert_eq!(result.outcome, SolveOutcome::DomainInvalid(Quantity::BusinessDays));
        assert!(result.business_days.is_none());
    }

    #[test]
    fn test_rate_branch_domain_errors() {
        let zero_days = solve(inputs(Some(100.0), Some(110.0), None, Some(0)));
        assert_eq!(zero_days.outcome, SolveOutcome::DomainInvalid(Quantity::AnnualRate));
        assert!(zero_days.annual_rate_pct.is_none());

        let negative_value = solve(inputs(Some(-100.0), Some(110.0), None, Some(252)));
        assert_eq!(negative_value.outcome, SolveOutcome::DomainInvalid(Quantity::AnnualRate));
        assert!(negative_value.daily_rate_pct.is_none());
    }

    #[test]
    fn test_rate_at_minus_100_unavailable() {
        let result = solve(inputs(Some(100.0), None, Some(-100.0), Some(10)));
        assert_eq!(result.outcome, SolveOutcome::DomainInvalid(Quantity::AnnualRate));
        assert!(result.future_value.is_none());
        assert!(result.daily_rate_pct.is_none());
        assert!(result.monthly_rate_pct.is_none());
    }

    #[test]
    fn test_rates_mutually_consistent() {
        let result = solve(inputs(Some(13000.0), Some(15000.0), None, Some(400)));
        let annual = result.annual_rate_pct.unwrap() / 100.0;
        let monthly = result.monthly_rate_pct.unwrap() / 100.0;
        let daily = result.daily_rate_pct.unwrap() / 100.0;

        assert_relative_eq!((1.0 + daily).powi(252), 1.0 + annual, max_relative = 1e-12);
        assert_relative_eq!((1.0 + monthly).powi(12), 1.0 + annual, max_relative = 1e-12);
    }

    #[test]
    fn test_no_nan_exposed() {
        let cases = [
            inputs(Some(0.0), Some(0.0), Some(5.0), None),
            inputs(Some(0.0), Some(0.0), None, Some(10)),
            inputs(None, Some(1e308), Some(1e6), Some(u32::MAX)),
            inputs(Some(1e308), None, Some(1e6), Some(u32::MAX)),
        ];
        for case in cases {
            let result = solve(case);
            for field in [
                result.present_value,
                result.future_value,
                result.annual_rate_pct,
                result.monthly_rate_pct,
                result.daily_rate_pct,
                result.business_days,
            ]
            .into_iter()
            .flatten()
            {
                assert!(field.is_finite(), "{:?} exposed {}", case, field);
            }
        }
    }
}
