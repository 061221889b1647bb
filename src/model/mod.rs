//! Types that represent the core data model, such as `Project` and `CategorySpend`.
mod amount;
mod chart;
mod project;

pub use amount::{Amount, AmountError, AmountFormat};
pub use chart::{CategoryLabel, ChartRecord};
pub use project::{CategorySpend, Project};
