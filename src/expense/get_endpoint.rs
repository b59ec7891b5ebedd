//! Defines the endpoints for reading expenses.

use axum::{Json, extract::State};

use crate::{
    Error,
    database_id::ExpenseId,
    expense::{
        Expense, ExpenseState,
        core::{get_expense, list_expenses},
    },
    extract::ApiPath,
};

/// A route handler that responds with every expense, most recent date first.
pub async fn list_expenses_endpoint(
    State(state): State<ExpenseState>,
) -> Result<Json<Vec<Expense>>, Error> {
    let connection = state.connection()?;

    list_expenses(&connection)
        .inspect_err(|error| tracing::error!("could not list expenses: {error}"))
        .map(Json)
}

/// A route handler that responds with a single expense.
pub async fn get_expense_endpoint(
    State(state): State<ExpenseState>,
    ApiPath(expense_id): ApiPath<ExpenseId>,
) -> Result<Json<Expense>, Error> {
    let connection = state.connection()?;

    get_expense(expense_id, &connection).map(Json)
}
