//! Database ID type definitions.

/// Alias for the integer type SQLite assigns to rows in the `expenses` table.
pub type ExpenseId = i64;
