//! Rate periods and equivalent-rate conversion

mod period;
mod converter;

pub use period::{RatePeriod, BUSINESS_DAYS_PER_YEAR, MONTHS_PER_YEAR};
pub use converter::{convert, convert_all, equivalent_decimal, EquivalentRate};
