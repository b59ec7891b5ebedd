//! Defines the core data models and database queries for expenses.

use rusqlite::{Connection, Row, params};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, database_id::ExpenseId};

// Dates travel over the wire and are stored in SQLite as `YYYY-MM-DD`.
time::serde::format_description!(pub(crate) iso_date, Date, "[year]-[month]-[day]");

// ============================================================================
// MODELS
// ============================================================================

/// A single dated spending record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID SQLite assigned to the expense when it was created.
    pub id: ExpenseId,
    /// What the money was spent on.
    pub description: String,
    /// How much was spent. Currency agnostic.
    pub amount: f64,
    /// A free-form label such as "Food" or "Bills".
    pub category: String,
    /// The day the money was spent.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// When the row was inserted, as SQLite's `CURRENT_TIMESTAMP` text.
    pub created_at: String,
}

/// The fields a client supplies to create an expense or to replace the
/// mutable fields of an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseInput {
    /// What the money was spent on.
    pub description: String,
    /// How much was spent.
    pub amount: f64,
    /// A free-form label such as "Food" or "Bills".
    pub category: String,
    /// The day the money was spent.
    #[serde(with = "iso_date")]
    pub date: Date,
}

impl ExpenseInput {
    /// Create a new expense input.
    pub fn new(description: &str, amount: f64, category: &str, date: Date) -> Self {
        Self {
            description: description.to_owned(),
            amount,
            category: category.to_owned(),
            date,
        }
    }

    /// Check the values that the type system cannot.
    ///
    /// # Errors
    /// Returns [Error::InvalidExpense] if the description is blank or the
    /// amount is not a positive, finite number.
    pub fn validate(&self) -> Result<(), Error> {
        if self.description.trim().is_empty() {
            return Err(Error::InvalidExpense(
                "description must not be empty".to_owned(),
            ));
        }

        if !(self.amount.is_finite() && self.amount > 0.0) {
            return Err(Error::InvalidExpense(
                "amount must be a positive number".to_owned(),
            ));
        }

        Ok(())
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

const SELECT_COLUMNS: &str = "id, description, amount, category, date, created_at";

type RowsAffected = usize;

/// Create a new expense in the database.
///
/// The ID and creation timestamp are assigned by SQLite.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_expense(input: &ExpenseInput, connection: &Connection) -> Result<Expense, Error> {
    let expense = connection
        .prepare(&format!(
            "INSERT INTO expenses (description, amount, category, date)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {SELECT_COLUMNS}"
        ))?
        .query_row(
            params![input.description, input.amount, input.category, input.date],
            map_expense_row,
        )?;

    Ok(expense)
}

/// Retrieve an expense from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid expense,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_expense(id: ExpenseId, connection: &Connection) -> Result<Expense, Error> {
    let expense = connection
        .prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM expenses WHERE id = :id"
        ))?
        .query_one(&[(":id", &id)], map_expense_row)?;

    Ok(expense)
}

/// Retrieve every expense, most recent date first.
///
/// Expenses on the same date are ordered newest row first.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn list_expenses(connection: &Connection) -> Result<Vec<Expense>, Error> {
    connection
        .prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM expenses ORDER BY date DESC, id DESC"
        ))?
        .query_map([], map_expense_row)?
        .map(|maybe_expense| maybe_expense.map_err(Error::from))
        .collect()
}

/// Replace the description, amount, category and date of the expense `id`.
///
/// The ID and creation timestamp are left untouched.
///
/// # Errors
/// This function will return a:
/// - [Error::UpdateMissingExpense] if `id` does not refer to a valid expense,
/// - or [Error::SqlError] there is some other SQL error.
pub fn update_expense(
    id: ExpenseId,
    input: &ExpenseInput,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected: RowsAffected = connection.execute(
        "UPDATE expenses
         SET description = ?1, amount = ?2, category = ?3, date = ?4
         WHERE id = ?5",
        params![
            input.description,
            input.amount,
            input.category,
            input.date,
            id
        ],
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingExpense);
    }

    Ok(())
}

/// Delete the expense `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::DeleteMissingExpense] if `id` does not refer to a valid expense,
/// - or [Error::SqlError] there is some other SQL error.
pub fn delete_expense(id: ExpenseId, connection: &Connection) -> Result<(), Error> {
    let rows_affected: RowsAffected =
        connection.execute("DELETE FROM expenses WHERE id = :id", &[(":id", &id)])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingExpense);
    }

    Ok(())
}

/// Get the total number of expenses in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn count_expenses(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM expenses", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the expenses table in the database if it does not exist yet.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                description TEXT NOT NULL,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                date TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
                )",
        (),
    )?;

    // Listing is ordered by date.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);",
        (),
    )?;

    Ok(())
}

/// Map a database row to an Expense.
pub fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;
    let description = row.get(1)?;
    let amount = row.get(2)?;
    let category = row.get(3)?;
    let date = row.get(4)?;
    let created_at = row.get(5)?;

    Ok(Expense {
        id,
        description,
        amount,
        category,
        date,
        created_at,
    })
}

// ============================================================================
// TESTS
// ============================================================================
