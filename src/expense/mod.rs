//! Expense management.
//!
//! This module contains everything related to expenses:
//! - The `Expense` model and the `ExpenseInput` payload for creating and updating expenses
//! - Database functions for storing, querying, and managing expenses
//! - Seeding of demonstration expenses
//! - The JSON route handlers for the `/api/expenses` endpoints

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod responses;
mod seed;
mod state;

pub(crate) use self::core::iso_date;
pub use self::core::{
    Expense, ExpenseInput, count_expenses, create_expense, create_expense_table, delete_expense,
    get_expense, list_expenses, update_expense,
};
pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use edit_endpoint::edit_expense_endpoint;
pub use get_endpoint::{get_expense_endpoint, list_expenses_endpoint};
pub use responses::{CreatedResponse, MessageResponse};
pub use seed::{SAMPLE_EXPENSES, seed_sample_expenses};
pub use state::ExpenseState;
