//! Compound Calc - compound-interest engine on a 252 business-day year
//!
//! This library provides:
//! - A solver for the missing one of {present value, future value, annual rate, business days}
//! - Equivalent-rate conversion between annual, semiannual, monthly and daily periods
//! - Day-by-day projection of an investment under a fixed daily rate
//! - A percentage splitter for allocating a total across assets
//! - Parallel batch solving from CSV

pub mod error;
pub mod rates;
pub mod solver;
pub mod projection;
pub mod allocation;
pub mod config;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{CalcError, CalcResult};
pub use rates::{convert, RatePeriod};
pub use solver::{solve, InvestmentInputs, InvestmentResult, SolveOutcome};
pub use projection::{project, ProjectionPoint, ProjectionSeries};
pub use config::CalculatorConfig;
pub use scenario::BatchRunner;
