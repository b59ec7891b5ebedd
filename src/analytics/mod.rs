//! Spending analytics: totals grouped by category and by month.

mod core;
mod endpoints;

pub use self::core::{CategoryTotal, MonthlyTotal, get_category_totals, get_monthly_totals};
pub use endpoints::{get_category_totals_endpoint, get_monthly_totals_endpoint};
