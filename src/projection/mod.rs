//! Business-day projection of an investment under a fixed daily rate

mod series;
mod table;

pub use series::{project, project_checked, ProjectionIter, ProjectionPoint};
pub use table::{ProjectionSeries, ProjectionSummary};
