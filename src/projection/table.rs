//! Projection output structures

use super::series::{project, ProjectionPoint};
use crate::error::CalcResult;
use crate::solver::InvestmentResult;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Complete day-by-day projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    /// Value at day 0
    pub present_value: f64,

    /// Daily rate as a decimal
    pub daily_rate: f64,

    points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    pub(crate) fn new(present_value: f64, daily_rate: f64, points: Vec<ProjectionPoint>) -> Self {
        Self {
            present_value,
            daily_rate,
            points,
        }
    }

    /// Build the evolution table for a solve result.
    ///
    /// Needs present value, daily rate and business days; a fractional day
    /// count is truncated toward zero. Allocates `days + 1` points, so callers
    /// that only need the totals should use [`ProjectionSummary::from_result`].
    pub fn from_result(result: &InvestmentResult) -> Option<Self> {
        let (present_value, daily_rate, days) = table_span(result)?;
        Some(project(present_value, daily_rate, days))
    }

    /// Points ordered by day, starting at day 0
    pub fn points(&self) -> &[ProjectionPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a series holds at least the day-0 point. Kept to pair
    /// with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let days = self.points.last().map(|p| p.day).unwrap_or(0);
        ProjectionSummary::compute(self.present_value, self.daily_rate, days)
    }

    /// Write `day,accumulated_value` rows with a header
    pub fn write_csv<W: Write>(&self, writer: W) -> CalcResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for point in &self.points {
            csv_writer.serialize(point)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn write_csv_path<P: AsRef<Path>>(&self, path: P) -> CalcResult<()> {
        let file = std::fs::File::create(path)?;
        self.write_csv(file)
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub days: u32,
    pub initial_value: f64,
    pub final_value: f64,
    pub total_growth: f64,
    /// `None` when starting from zero
    pub growth_pct: Option<f64>,
}

impl ProjectionSummary {
    /// Totals after `days` business days in closed form, without
    /// materializing the table
    pub fn compute(present_value: f64, daily_rate: f64, days: u32) -> Self {
        let final_value = present_value * (1.0 + daily_rate).powf(f64::from(days));
        let total_growth = final_value - present_value;
        let growth_pct = if present_value != 0.0 {
            Some(total_growth / present_value * 100.0)
        } else {
            None
        };

        Self {
            days,
            initial_value: present_value,
            final_value,
            total_growth,
            growth_pct,
        }
    }

    /// Summary of the evolution table a solve result would produce
    pub fn from_result(result: &InvestmentResult) -> Option<Self> {
        let (present_value, daily_rate, days) = table_span(result)?;
        Some(Self::compute(present_value, daily_rate, days))
    }
}

/// Present value, daily rate and whole day count of a solve result
fn table_span(result: &InvestmentResult) -> Option<(f64, f64, u32)> {
    let present_value = result.present_value?;
    let daily_rate = result.daily_rate_decimal()?;
    let days = result.business_days?;
    if !days.is_finite() || days < 0.0 || days > f64::from(u32::MAX) {
        return None;
    }
    Some((present_value, daily_rate, days.trunc() as u32))
}
