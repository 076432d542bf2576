//! Compounding periods under the 252 business-day year

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Business days per year used for every daily-rate derivation
pub const BUSINESS_DAYS_PER_YEAR: u32 = 252;

/// Months per year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Period a rate is quoted over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatePeriod {
    /// Once per year
    Annual,
    /// Twice per year
    Semiannual,
    /// Twelve times per year
    Monthly,
    /// Once per business day (252 per year)
    Daily,
}

impl RatePeriod {
    /// All periods, longest first
    pub const ALL: [RatePeriod; 4] = [
        RatePeriod::Annual,
        RatePeriod::Semiannual,
        RatePeriod::Monthly,
        RatePeriod::Daily,
    ];

    /// Number of compounding periods in one year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            RatePeriod::Annual => 1,
            RatePeriod::Semiannual => 2,
            RatePeriod::Monthly => MONTHS_PER_YEAR,
            RatePeriod::Daily => BUSINESS_DAYS_PER_YEAR,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RatePeriod::Annual => "annual",
            RatePeriod::Semiannual => "semiannual",
            RatePeriod::Monthly => "monthly",
            RatePeriod::Daily => "daily",
        }
    }
}

impl fmt::Display for RatePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatePeriod {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annual" | "yearly" | "anual" | "a" => Ok(RatePeriod::Annual),
            "semiannual" | "semi-annual" | "semestral" | "s" => Ok(RatePeriod::Semiannual),
            "monthly" | "mensal" | "m" => Ok(RatePeriod::Monthly),
            "daily" | "diaria" | "d" => Ok(RatePeriod::Daily),
            other => Err(CalcError::UnknownPeriod(other.to_string())),
        }
    }
}
