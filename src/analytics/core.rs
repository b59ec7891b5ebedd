//! Aggregate queries over the expenses table.

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::Error;

/// The sum of the amounts of all expenses with the same category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// The category label.
    pub category: String,
    /// The sum of the amounts in the category.
    pub total: f64,
}

/// The sum of the amounts of all expenses in the same calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// The month formatted as `YYYY-MM`.
    pub month: String,
    /// The sum of the amounts in the month.
    pub total: f64,
}

/// Get the total spent per category, largest total first.
///
/// Categories with equal totals are ordered alphabetically.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn get_category_totals(connection: &Connection) -> Result<Vec<CategoryTotal>, Error> {
    connection
        .prepare(
            "SELECT category, SUM(amount) AS total
             FROM expenses
             GROUP BY category
             ORDER BY total DESC, category ASC",
        )?
        .query_map([], |row| {
            Ok(CategoryTotal {
                category: row.get(0)?,
                total: row.get(1)?,
            })
        })?
        .map(|maybe_total| maybe_total.map_err(Error::from))
        .collect()
}

/// Get the total spent per month, earliest month first.
///
/// The month is the `YYYY-MM` prefix of the expense's date.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn get_monthly_totals(connection: &Connection) -> Result<Vec<MonthlyTotal>, Error> {
    connection
        .prepare(
            "SELECT substr(date, 1, 7) AS month, SUM(amount) AS total
             FROM expenses
             GROUP BY month
             ORDER BY month ASC",
        )?
        .query_map([], |row| {
            Ok(MonthlyTotal {
                month: row.get(0)?,
                total: row.get(1)?,
            })
        })?
        .map(|maybe_total| maybe_total.map_err(Error::from))
        .collect()
}
