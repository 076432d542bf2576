//! AWS Lambda handler exposing the calculator as a JSON API
//!
//! Accepts a Lambda Function URL request whose body names an operation:
//!
//! ```json
//! {"operation": "solve", "present_value": 13000, "future_value": 15000, "business_days": 252}
//! {"operation": "convert", "rate_pct": 7.33, "from": "annual", "to": "monthly"}
//! {"operation": "project", "present_value": 10000, "daily_rate": 0.000284, "days": 252}
//! {"operation": "allocate", "total": 10000}
//! ```

use aws_lambda_events::event::lambda_function_urls::LambdaFunctionUrlRequest;
use compound_calc::{
    allocation::{self, AllocationWeight},
    config::CalculatorConfig,
    projection::{project_checked, ProjectionSeries, ProjectionSummary},
    rates::{convert, convert_all, RatePeriod},
    solver::{solve, InvestmentInputs},
    CalcError,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Instant;

/// Request body, tagged by operation
#[derive(Debug, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
enum CalcRequest {
    Solve {
        #[serde(default)]
        present_value: Option<f64>,
        #[serde(default)]
        future_value: Option<f64>,
        #[serde(default)]
        annual_rate: Option<f64>,
        #[serde(default)]
        business_days: Option<u32>,
        /// Include the day-by-day evolution table
        #[serde(default)]
        include_table: bool,
    },
    Convert {
        rate_pct: f64,
        #[serde(default = "default_from")]
        from: RatePeriod,
        /// All periods when omitted
        #[serde(default)]
        to: Option<RatePeriod>,
    },
    Project {
        present_value: f64,
        daily_rate: f64,
        days: i64,
    },
    Allocate {
        #[serde(default)]
        total: Option<f64>,
        #[serde(default)]
        weights: Vec<AllocationWeight>,
    },
}

fn default_from() -> RatePeriod { RatePeriod::Annual }

/// Longest evolution table returned in one response (about 40 years)
const MAX_TABLE_DAYS: u32 = 10_080;

fn check_table_days(days: u32) -> Result<(), CalcError> {
    if days > MAX_TABLE_DAYS {
        return Err(CalcError::InvalidInput {
            field: "days".into(),
            reason: format!("table of {} days exceeds the limit of {}", days, MAX_TABLE_DAYS),
        });
    }
    Ok(())
}

fn handle_request(request: CalcRequest, config: &CalculatorConfig) -> Result<Value, CalcError> {
    let value = match request {
        CalcRequest::Solve {
            present_value,
            future_value,
            annual_rate,
            business_days,
            include_table,
        } => {
            let result = solve(InvestmentInputs::new(present_value, future_value, annual_rate, business_days));
            let summary = ProjectionSummary::from_result(&result);
            let table = match summary {
                Some(summary) if include_table => {
                    check_table_days(summary.days)?;
                    ProjectionSeries::from_result(&result)
                }
                _ => None,
            };
            json!({
                "result": result,
                "projection": summary,
                "table": table.as_ref().map(|s| s.points()),
            })
        }
        CalcRequest::Convert { rate_pct, from, to: Some(to) } => {
            let converted = convert(rate_pct, from, to)?;
            json!({ "rate_pct": rate_pct, "from": from, "to": to, "converted_pct": converted })
        }
        CalcRequest::Convert { rate_pct, from, to: None } => {
            let equivalents = convert_all(rate_pct, from)?;
            json!({ "rate_pct": rate_pct, "from": from, "equivalents": equivalents })
        }
        CalcRequest::Project { present_value, daily_rate, days } => {
            if days > 0 {
                check_table_days(u32::try_from(days).unwrap_or(u32::MAX))?;
            }
            let series = project_checked(present_value, daily_rate, days)?;
            json!({ "summary": series.summary(), "points": series.points() })
        }
        CalcRequest::Allocate { total, weights } => {
            let total = total.unwrap_or(config.allocation.total);
            let weights = if weights.is_empty() { config.allocation.assets.clone() } else { weights };
            let entries = allocation::split(total, &weights)?;
            json!({ "total": total, "entries": entries })
        }
    };
    Ok(value)
}

/// Parse and run one request body; returns (status code, response body)
fn handle_body(body: Option<&str>, config: &CalculatorConfig) -> (u16, Value) {
    let body = match body {
        Some(body) if !body.trim().is_empty() => body,
        _ => return (400, json!({ "error": "request body is empty" })),
    };

    let request: CalcRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(e) => return (400, json!({ "error": format!("invalid request: {}", e) })),
    };

    match handle_request(request, config) {
        Ok(value) => (200, value),
        Err(e) => (400, json!({ "error": e.to_string() })),
    }
}

async fn handler(event: LambdaEvent<LambdaFunctionUrlRequest>, config: &CalculatorConfig) -> Result<Value, Error> {
    let start = Instant::now();
    let request = event.payload;

    let (status, mut body) = if request.is_base64_encoded {
        (400, json!({ "error": "base64-encoded bodies are not supported" }))
    } else {
        handle_body(request.body.as_deref(), config)
    };

    body["execution_time_ms"] = json!(start.elapsed().as_millis() as u64);
    log::info!("Handled request with status {} in {:?}", status, start.elapsed());

    Ok(json!({
        "statusCode": status,
        "headers": { "content-type": "application/json" },
        "body": body.to_string(),
    }))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let config = CalculatorConfig::load(None)?;
    let config = &config;

    run(service_fn(move |event| async move { handler(event, config).await })).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(body: &str) -> (u16, Value) {
        handle_body(Some(body), &CalculatorConfig::default())
    }

    #[test]
    fn test_solve_request() {
        let (status, body) = call(r#"{"operation": "solve", "present_value": 13000, "future_value": 15000, "business_days": 252}"#);
        assert_eq!(status, 200);
        assert_eq!(body["result"]["outcome"]["status"], "solved");
        assert_eq!(body["result"]["outcome"]["quantity"], "annual_rate");
        assert!(body["table"].is_null());
        assert_eq!(body["projection"]["days"], 252);
    }

    #[test]
    fn test_solve_with_table() {
        let (_, body) = call(r#"{"operation": "solve", "present_value": 100, "annual_rate": 10, "business_days": 3, "include_table": true}"#);
        assert_eq!(body["table"].as_array().map(|t| t.len()), Some(4));
    }

    #[test]
    fn test_long_solve_returns_summary_only() {
        let (status, body) = call(r#"{"operation": "solve", "present_value": 100, "future_value": 1e10, "annual_rate": 0.001}"#);
        assert_eq!(status, 200);
        assert!(body["table"].is_null());
        assert!(body["projection"]["days"].as_u64().unwrap() > 400_000_000);

        let (status, body) = call(
            r#"{"operation": "solve", "present_value": 100, "future_value": 1e10, "annual_rate": 0.001, "include_table": true}"#,
        );
        assert_eq!(status, 400);
        assert!(body["error"].as_str().unwrap().contains("exceeds the limit"));
    }

    #[test]
    fn test_project_length_limit() {
        let (status, _) = call(r#"{"operation": "project", "present_value": 100, "daily_rate": 0.01, "days": 10080}"#);
        assert_eq!(status, 200);

        let (status, _) = call(r#"{"operation": "project", "present_value": 100, "daily_rate": 0.01, "days": 10000000000}"#);
        assert_eq!(status, 400);
    }

    #[test]
    fn test_convert_request() {
        let (status, body) = call(r#"{"operation": "convert", "rate_pct": 7.33, "to": "monthly"}"#);
        assert_eq!(status, 200);
        let converted = body["converted_pct"].as_f64().unwrap();
        assert!((converted - 0.591224).abs() < 1e-6);

        let (_, body) = call(r#"{"operation": "convert", "rate_pct": 7.33}"#);
        assert_eq!(body["equivalents"].as_array().map(|t| t.len()), Some(4));
    }

    #[test]
    fn test_contract_violations_are_400() {
        let (status, body) = call(r#"{"operation": "project", "present_value": 100, "daily_rate": 0.01, "days": -5}"#);
        assert_eq!(status, 400);
        assert!(body["error"].as_str().unwrap().contains("-5"));

        let (status, _) = call(r#"{"operation": "convert", "rate_pct": -100, "to": "daily"}"#);
        assert_eq!(status, 400);

        let (status, _) = call(r#"{"operation": "allocate", "weights": [{"asset": "Cash", "percent": 50}]}"#);
        assert_eq!(status, 400);

        let (status, _) = call(r#"{"operation": "rebalance"}"#);
        assert_eq!(status, 400);

        assert_eq!(handle_body(None, &CalculatorConfig::default()).0, 400);
    }

    #[test]
    fn test_allocate_defaults() {
        let (status, body) = call(r#"{"operation": "allocate"}"#);
        assert_eq!(status, 200);
        assert_eq!(body["entries"][5]["amount"], 500.0);
    }
}
