//! Investment inputs and text normalization

use serde::{Deserialize, Serialize};

/// Parse a user-entered number.
///
/// Accepts comma or dot as the decimal separator. Blank, unparsable and
/// non-finite input is absent.
pub fn parse_input(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a business-day count: a non-negative whole number, otherwise absent
pub fn parse_days(raw: &str) -> Option<u32> {
    let value = parse_input(raw)?;
    if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return None;
    }
    Some(value as u32)
}

/// True when `raw` is a number that `parse_days` still treats as absent,
/// e.g. `12.5` or `-3`
pub fn days_not_whole(raw: &str) -> bool {
    parse_input(raw).is_some() && parse_days(raw).is_none()
}

/// The four quantities of the compound-interest relationship.
///
/// Leave exactly one field as `None` to have the solver compute it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInputs {
    /// Value at day zero (currency units)
    #[serde(default)]
    pub present_value: Option<f64>,

    /// Value after `business_days` (currency units)
    #[serde(default)]
    pub future_value: Option<f64>,

    /// Annual rate in percent (e.g. 7.33 for 7.33%)
    #[serde(default)]
    pub annual_rate: Option<f64>,

    /// Holding period in business days
    #[serde(default)]
    pub business_days: Option<u32>,
}

impl InvestmentInputs {
    pub fn new(
        present_value: Option<f64>,
        future_value: Option<f64>,
        annual_rate: Option<f64>,
        business_days: Option<u32>,
    ) -> Self {
        Self {
            present_value,
            future_value,
            annual_rate,
            business_days,
        }
    }

    /// Build inputs from raw form text, treating unparsable fields as absent
    pub fn from_text(present_value: &str, future_value: &str, annual_rate: &str, business_days: &str) -> Self {
        if days_not_whole(business_days) {
            log::warn!("Ignoring business days {:?}: not a non-negative whole number", business_days.trim());
        }
        Self {
            present_value: parse_input(present_value),
            future_value: parse_input(future_value),
            annual_rate: parse_input(annual_rate),
            business_days: parse_days(business_days),
        }
    }

    /// Number of quantities supplied (0-4)
    pub fn known_count(&self) -> usize {
        [
            self.present_value.is_some(),
            self.future_value.is_some(),
            self.annual_rate.is_some(),
            self.business_days.is_some(),
        ]
        .iter()
        .filter(|&&known| known)
        .count()
    }
}
