//! Text rendering of engine outputs
//!
//! The engine returns raw numbers; precision and labels are chosen here.
//! Unavailable fields render as a marker, never as zero.

use crate::allocation::AllocationEntry;
use crate::config::DisplayConfig;
use crate::projection::{ProjectionSeries, ProjectionSummary};
use crate::rates::RatePeriod;
use crate::solver::{InvestmentResult, SolveOutcome};

pub const UNAVAILABLE: &str = "unavailable";

/// Fixed decimals with `,` thousands grouping, e.g. `13,000.00`
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

pub fn format_currency(value: f64, display: &DisplayConfig) -> String {
    format!("{} {}", display.currency_symbol, group_thousands(value, display.value_decimals))
}

pub fn format_rate(rate_pct: f64, display: &DisplayConfig) -> String {
    format!("{:.*} %", display.rate_decimals, rate_pct)
}

fn or_unavailable(value: Option<f64>, render: impl Fn(f64) -> String) -> String {
    value.map(render).unwrap_or_else(|| UNAVAILABLE.to_string())
}

/// Labelled lines for a solve result, in form order
pub fn result_lines(result: &InvestmentResult, display: &DisplayConfig) -> Vec<(&'static str, String)> {
    let currency = |v| format_currency(v, display);
    let rate = |v| format_rate(v, display);

    vec![
        ("Present value (VP)", or_unavailable(result.present_value, currency)),
        ("Future value (VF)", or_unavailable(result.future_value, currency)),
        ("Annual rate", or_unavailable(result.annual_rate_pct, rate)),
        ("Monthly rate", or_unavailable(result.monthly_rate_pct, rate)),
        ("Daily rate", or_unavailable(result.daily_rate_pct, rate)),
        (
            "Business days",
            or_unavailable(result.business_days, |v| format!("{:.*}", display.day_decimals, v)),
        ),
    ]
}

pub fn outcome_note(outcome: &SolveOutcome) -> String {
    match outcome {
        SolveOutcome::Solved(q) => format!("Computed {}.", q),
        SolveOutcome::FullyDetermined => "All four values given; nothing to compute.".to_string(),
        SolveOutcome::UnderDetermined => {
            "Not enough values: leave exactly one field blank.".to_string()
        }
        SolveOutcome::DomainInvalid(q) => {
            format!("Could not compute {}: inputs are outside its domain.", q)
        }
    }
}

/// Note shown when the business-day text was a number but not a whole
/// non-negative one, so it was treated as blank
pub fn ignored_days_note(raw_days: &str) -> Option<String> {
    if !crate::solver::days_not_whole(raw_days) {
        return None;
    }
    Some(format!(
        "Business days {:?} ignored: it must be a non-negative whole number, so it was treated as blank.",
        raw_days.trim()
    ))
}

pub fn render_result(result: &InvestmentResult, display: &DisplayConfig) -> String {
    let mut out = String::new();
    for (label, value) in result_lines(result, display) {
        out.push_str(&format!("{:<20} {}\n", format!("{}:", label), value));
    }
    out.push_str(&outcome_note(&result.outcome));
    out.push('\n');
    out
}

pub fn render_conversion(
    rate_pct: f64,
    from: RatePeriod,
    to: RatePeriod,
    converted_pct: f64,
    display: &DisplayConfig,
) -> String {
    format!(
        "{:.4}% {} is equivalent to {} {}",
        rate_pct,
        from,
        format_rate(converted_pct, display),
        to
    )
}

/// Day/value table, optionally truncated to the first `limit` rows
pub fn render_projection(series: &ProjectionSeries, display: &DisplayConfig, limit: Option<usize>) -> String {
    let mut out = format!("{:>8} {:>20}\n{}\n", "Day", "Accumulated value", "-".repeat(29));
    let shown = limit.unwrap_or(series.len()).min(series.len());
    for point in &series.points()[..shown] {
        out.push_str(&format!(
            "{:>8} {:>20}\n",
            point.day,
            format_currency(point.accumulated_value, display)
        ));
    }
    if shown < series.len() {
        out.push_str(&format!("... ({} more days)\n", series.len() - shown));
    }
    out
}

pub fn render_summary(summary: &ProjectionSummary, display: &DisplayConfig) -> String {
    let growth = summary
        .growth_pct
        .map(|pct| format_rate(pct, display))
        .unwrap_or_else(|| UNAVAILABLE.to_string());
    format!(
        "Initial: {}  Final: {}  Growth: {} ({}) over {} business days\n",
        format_currency(summary.initial_value, display),
        format_currency(summary.final_value, display),
        format_currency(summary.total_growth, display),
        growth,
        summary.days
    )
}

pub fn render_allocation(entries: &[AllocationEntry], display: &DisplayConfig) -> String {
    let mut out = format!("{:<34} {:>6} {:>18}\n{}\n", "Asset", "%", "Amount", "-".repeat(60));
    for entry in entries {
        out.push_str(&format!(
            "{:<34} {:>6} {:>18}\n",
            entry.asset,
            entry.percent,
            format_currency(entry.amount, display)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{solve, InvestmentInputs};

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(13000.0, 2), "13,000.00");
        assert_eq!(group_thousands(1234567.891, 2), "1,234,567.89");
        assert_eq!(group_thousands(999.5, 0), "1,000");
        assert_eq!(group_thousands(12.0, 2), "12.00");
        assert_eq!(group_thousands(-45000.0, 1), "-45,000.0");
        assert_eq!(group_thousands(-0.001, 2), "0.00");
    }

    #[test]
    fn test_unavailable_is_not_zero() {
        let display = DisplayConfig::default();
        let result = solve(InvestmentInputs::new(Some(13000.0), None, None, Some(252)));
        let lines = result_lines(&result, &display);

        assert_eq!(lines[0].1, "R$ 13,000.00");
        assert_eq!(lines[1].1, UNAVAILABLE);
        assert_eq!(lines[2].1, UNAVAILABLE);
        assert_eq!(lines[5].1, "252.00");
    }

    #[test]
    fn test_render_result_solved() {
        let display = DisplayConfig::default();
        let result = solve(InvestmentInputs::new(Some(13000.0), Some(15000.0), None, Some(252)));
        let text = render_result(&result, &display);

        assert!(text.contains("Annual rate:         15.38462 %"));
        assert!(text.contains("Computed annual rate."));
    }

    #[test]
    fn test_ignored_days_note() {
        let note = ignored_days_note(" 12.5 ").unwrap();
        assert!(note.starts_with("Business days \"12.5\" ignored"));
        assert!(ignored_days_note("252").is_none());
        assert!(ignored_days_note("").is_none());
    }

    #[test]
    fn test_render_conversion() {
        let display = DisplayConfig::default();
        let text = render_conversion(7.33, RatePeriod::Annual, RatePeriod::Monthly, 0.5912243, &display);
        assert_eq!(text, "7.3300% annual is equivalent to 0.59122 % monthly");
    }

    #[test]
    fn test_render_projection_limit() {
        let display = DisplayConfig::default();
        let series = crate::projection::project(100.0, 0.0, 10);
        let text = render_projection(&series, &display, Some(3));
        assert!(text.contains("... (8 more days)"));
        assert_eq!(text.lines().count(), 2 + 3 + 1);
    }
}
