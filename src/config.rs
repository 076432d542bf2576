//! Calculator configuration
//!
//! Loaded from a JSON file; every field has a default so a partial file (or
//! none at all) is valid:
//!
//! ```json
//! {
//!   "display": { "currency_symbol": "R$", "rate_decimals": 4 },
//!   "allocation": { "total": 25000.0 }
//! }
//! ```

use crate::allocation::{default_weights, AllocationWeight, DEFAULT_TOTAL};
use crate::error::CalcResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "COMPOUND_CALC_CONFIG";

fn default_currency_symbol() -> String { "R$".to_string() }
fn default_value_decimals() -> usize { 2 }
fn default_rate_decimals() -> usize { 5 }
fn default_day_decimals() -> usize { 2 }
fn default_total() -> f64 { DEFAULT_TOTAL }

/// Display precision for rendered results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Decimals for present/future values
    #[serde(default = "default_value_decimals")]
    pub value_decimals: usize,

    /// Decimals for percent rates
    #[serde(default = "default_rate_decimals")]
    pub rate_decimals: usize,

    #[serde(default = "default_day_decimals")]
    pub day_decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            value_decimals: default_value_decimals(),
            rate_decimals: default_rate_decimals(),
            day_decimals: default_day_decimals(),
        }
    }
}

/// Defaults for the allocation table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationConfig {
    #[serde(default = "default_total")]
    pub total: f64,

    #[serde(default = "default_weights")]
    pub assets: Vec<AllocationWeight>,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            total: default_total(),
            assets: default_weights(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub allocation: AllocationConfig,
}

impl CalculatorConfig {
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> CalcResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Resolve configuration: explicit path, then `COMPOUND_CALC_CONFIG`,
    /// then built-in defaults
    pub fn load(explicit: Option<&Path>) -> CalcResult<Self> {
        if let Some(path) = explicit {
            log::debug!("Loading config from {}", path.display());
            return Self::from_json_path(path);
        }
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => {
                log::debug!("Loading config from {}={}", CONFIG_ENV_VAR, path);
                Self::from_json_path(path.trim())
            }
            _ => Ok(Self::default()),
        }
    }
}
