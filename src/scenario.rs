//! Batch solver for many investment rows
//!
//! Rows are independent, so they are solved in parallel with rayon and
//! returned in input order.

use crate::error::{CalcError, CalcResult};
use crate::solver::{load_inputs, solve, BatchInput, InvestmentInputs, InvestmentResult, SolveOutcome};
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Flat CSV output row; unavailable fields are empty cells
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRow {
    pub id: String,
    pub present_value: Option<f64>,
    pub future_value: Option<f64>,
    pub annual_rate_pct: Option<f64>,
    pub monthly_rate_pct: Option<f64>,
    pub daily_rate_pct: Option<f64>,
    pub business_days: Option<f64>,
    pub status: &'static str,
    pub target: Option<String>,
}

impl BatchRow {
    pub fn new(id: String, result: &InvestmentResult) -> Self {
        let status = match result.outcome {
            SolveOutcome::Solved(_) => "solved",
            SolveOutcome::FullyDetermined => "fully_determined",
            SolveOutcome::UnderDetermined => "under_determined",
            SolveOutcome::DomainInvalid(_) => "domain_invalid",
        };
        Self {
            id,
            present_value: result.present_value,
            future_value: result.future_value,
            annual_rate_pct: result.annual_rate_pct,
            monthly_rate_pct: result.monthly_rate_pct,
            daily_rate_pct: result.daily_rate_pct,
            business_days: result.business_days,
            status,
            target: result.target().map(|q| q.to_string()),
        }
    }
}

/// Parallel batch solver
///
/// # Example
/// ```ignore
/// let runner = BatchRunner::new().with_threads(4);
/// let rows = runner.run_file("inputs.csv")?;
/// write_results(std::io::stdout(), &rows)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    /// Worker threads; `None` uses rayon's global pool
    threads: Option<usize>,
}

impl BatchRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run on a dedicated pool of `threads` workers
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    fn install<T: Send>(&self, job: impl FnOnce() -> T + Send) -> CalcResult<T> {
        match self.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| CalcError::InvalidInput {
                        field: "threads".into(),
                        reason: e.to_string(),
                    })?;
                Ok(pool.install(job))
            }
            None => Ok(job()),
        }
    }

    /// Solve every input, preserving order
    pub fn run(&self, inputs: &[InvestmentInputs]) -> CalcResult<Vec<InvestmentResult>> {
        self.install(|| inputs.par_iter().map(|&input| solve(input)).collect())
    }

    /// Solve identified rows into CSV-ready output rows
    pub fn run_rows(&self, rows: &[BatchInput]) -> CalcResult<Vec<BatchRow>> {
        let results = self.install(|| {
            rows.par_iter()
                .map(|row| BatchRow::new(row.id.clone(), &solve(row.inputs)))
                .collect::<Vec<_>>()
        })?;

        let solved = results.iter().filter(|r| r.status == "solved").count();
        log::info!("Solved {} of {} batch rows", solved, results.len());
        Ok(results)
    }

    /// Load rows from a CSV file and solve them
    pub fn run_file<P: AsRef<Path>>(&self, path: P) -> CalcResult<Vec<BatchRow>> {
        let rows = load_inputs(path)?;
        self.run_rows(&rows)
    }
}

/// Write batch rows as CSV with a header
pub fn write_results<W: Write>(writer: W, rows: &[BatchRow]) -> CalcResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
