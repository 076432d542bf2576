//! Load investment input rows from CSV
//!
//! Expected headers: `id` (optional), `present_value`, `future_value`,
//! `annual_rate`, `business_days`. Cells go through the same normalization
//! as form input, so blank or unparsable cells are absent quantities.

use super::inputs::{parse_days, parse_input, InvestmentInputs};
use crate::error::CalcResult;
use csv::ReaderBuilder;
use serde::Serialize;
use std::path::Path;

/// Raw CSV row; every cell kept as text until normalized
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    present_value: Option<String>,
    #[serde(default)]
    future_value: Option<String>,
    #[serde(default)]
    annual_rate: Option<String>,
    #[serde(default)]
    business_days: Option<String>,
}

fn cell(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

impl CsvRow {
    fn into_input(self, line: usize) -> BatchInput {
        BatchInput {
            id: self
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| line.to_string()),
            inputs: InvestmentInputs {
                present_value: parse_input(cell(&self.present_value)),
                future_value: parse_input(cell(&self.future_value)),
                annual_rate: parse_input(cell(&self.annual_rate)),
                business_days: parse_days(cell(&self.business_days)),
            },
        }
    }
}

/// One identified row of a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchInput {
    /// Row identifier; the 1-based data line number when the file has no `id`
    pub id: String,
    pub inputs: InvestmentInputs,
}

/// Load input rows from a CSV file
pub fn load_inputs<P: AsRef<Path>>(path: P) -> CalcResult<Vec<BatchInput>> {
    let file = std::fs::File::open(path)?;
    load_inputs_from_reader(file)
}

/// Load input rows from any reader (e.g. string buffer, stdin)
pub fn load_inputs_from_reader<R: std::io::Read>(reader: R) -> CalcResult<Vec<BatchInput>> {
    let mut csv_reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut rows = Vec::new();

    for (index, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        rows.push(row.into_input(index + 1));
    }

    log::debug!("Loaded {} input rows", rows.len());
    Ok(rows)
}
