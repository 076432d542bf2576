//! Investment solver: present value, future value, rate and business days

mod inputs;
mod result;
mod engine;
pub mod loader;

pub use inputs::{days_not_whole, parse_days, parse_input, InvestmentInputs};
pub use result::{InvestmentResult, Quantity, SolveOutcome};
pub use engine::solve;
pub use loader::{load_inputs, load_inputs_from_reader, BatchInput};
