//! Percentage split of an investment total across named assets

use crate::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default amount to allocate
pub const DEFAULT_TOTAL: f64 = 10_000.0;

/// Target weight for one asset, in whole percent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationWeight {
    pub asset: String,
    pub percent: u32,
}

impl AllocationWeight {
    pub fn new(asset: impl Into<String>, percent: u32) -> Self {
        Self {
            asset: asset.into(),
            percent,
        }
    }
}

/// Parses `NAME=PCT`, e.g. `Tesouro IPCA=20`
impl FromStr for AllocationWeight {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CalcError::InvalidInput {
            field: "weight".into(),
            reason: format!("{}: {:?}", reason, s),
        };

        let (asset, percent) = s.rsplit_once('=').ok_or_else(|| invalid("expected NAME=PCT"))?;
        let asset = asset.trim();
        if asset.is_empty() {
            return Err(invalid("asset name is empty"));
        }
        let percent = percent
            .trim()
            .parse::<u32>()
            .map_err(|_| invalid("percent must be a whole number"))?;

        Ok(Self::new(asset, percent))
    }
}

/// One row of the allocation table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub asset: String,
    pub percent: u32,
    pub amount: f64,
}

/// Starter portfolio
pub fn default_weights() -> Vec<AllocationWeight> {
    vec![
        AllocationWeight::new("Tesouro IPCA", 20),
        AllocationWeight::new("Tesouro Selic", 20),
        AllocationWeight::new("Equities", 20),
        AllocationWeight::new("Real estate funds (FIIs)", 20),
        AllocationWeight::new("Bank fixed income (CDB/LCI/LCA)", 15),
        AllocationWeight::new("Cash reserve", 5),
    ]
}

/// Sum of weights in percent, accumulated in `u64`
pub fn total_percent(weights: &[AllocationWeight]) -> u64 {
    weights.iter().map(|w| u64::from(w.percent)).sum()
}

/// Split `total` by `weights`, which must sum to exactly 100
pub fn split(total: f64, weights: &[AllocationWeight]) -> CalcResult<Vec<AllocationEntry>> {
    if !total.is_finite() || total < 0.0 {
        return Err(CalcError::InvalidInput {
            field: "total".into(),
            reason: format!("must be a non-negative amount, got {}", total),
        });
    }

    let sum = total_percent(weights);
    if sum != 100 {
        return Err(CalcError::AllocationSum { total: sum });
    }

    Ok(weights
        .iter()
        .map(|w| AllocationEntry {
            asset: w.asset.clone(),
            percent: w.percent,
            amount: total * f64::from(w.percent) / 100.0,
        })
        .collect())
}
