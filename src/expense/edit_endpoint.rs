//! Defines the endpoint for replacing the fields of an existing expense.

use axum::{Json, extract::State};

use crate::{
    Error,
    database_id::ExpenseId,
    expense::{ExpenseInput, ExpenseState, core::update_expense, responses::MessageResponse},
    extract::{ApiJson, ApiPath},
};

/// A route handler for updating an expense.
pub async fn edit_expense_endpoint(
    State(state): State<ExpenseState>,
    ApiPath(expense_id): ApiPath<ExpenseId>,
    ApiJson(input): ApiJson<ExpenseInput>,
) -> Result<Json<MessageResponse>, Error> {
    input.validate()?;

    let connection = state.connection()?;

    match update_expense(expense_id, &input, &connection) {
        Ok(()) => {
            tracing::info!("Updated expense {expense_id}");
            Ok(Json(MessageResponse::new("Expense updated")))
        }
        Err(Error::UpdateMissingExpense) => {
            tracing::warn!("Could not update expense {expense_id}: no such expense");
            Err(Error::UpdateMissingExpense)
        }
        Err(error) => {
            tracing::error!("Could not update expense {expense_id}: {error}");
            Err(error)
        }
    }
}
