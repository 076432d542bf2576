//! Day-by-day accumulation under a fixed daily rate

use crate::error::{CalcError, CalcResult};
use super::table::ProjectionSeries;
use serde::{Deserialize, Serialize};

/// Accumulated value at the end of one business day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Business day index, 0 = start
    pub day: u32,
    pub accumulated_value: f64,
}

/// Lazy iterator over `pv * (1 + rate)^day` for `day` in `0..=days`
#[derive(Debug, Clone)]
pub struct ProjectionIter {
    present_value: f64,
    growth: f64,
    next_day: u64,
    end: u64,
}

impl ProjectionIter {
    pub fn new(present_value: f64, daily_rate: f64, days: u32) -> Self {
        Self {
            present_value,
            growth: 1.0 + daily_rate,
            next_day: 0,
            end: u64::from(days) + 1,
        }
    }
}

impl Iterator for ProjectionIter {
    type Item = ProjectionPoint;

    fn next(&mut self) -> Option<ProjectionPoint> {
        if self.next_day >= self.end {
            return None;
        }
        let day = self.next_day as u32;
        self.next_day += 1;

        // Each point from the closed form so error does not accumulate
        Some(ProjectionPoint {
            day,
            accumulated_value: self.present_value * self.growth.powf(f64::from(day)),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next_day) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProjectionIter {}

/// Project `present_value` forward under `daily_rate` (decimal) for `days`
/// business days. Returns `days + 1` points, day 0 first.
pub fn project(present_value: f64, daily_rate: f64, days: u32) -> ProjectionSeries {
    log::debug!(
        "Projecting {} at {} per day over {} days",
        present_value, daily_rate, days
    );
    ProjectionSeries::new(
        present_value,
        daily_rate,
        ProjectionIter::new(present_value, daily_rate, days).collect(),
    )
}

/// `project` for callers holding a signed day count; negative counts are
/// rejected rather than wrapped
pub fn project_checked(present_value: f64, daily_rate: f64, days: i64) -> CalcResult<ProjectionSeries> {
    if days < 0 {
        return Err(CalcError::NegativeDays(days));
    }
    let days = u32::try_from(days).map_err(|_| CalcError::InvalidInput {
        field: "days".into(),
        reason: format!("{} exceeds the supported range", days),
    })?;
    Ok(project(present_value, daily_rate, days))
}
