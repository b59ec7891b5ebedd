//! Defines the endpoint for deleting an expense.

use axum::{Json, extract::State};

use crate::{
    Error,
    database_id::ExpenseId,
    expense::{ExpenseState, core::delete_expense, responses::MessageResponse},
    extract::ApiPath,
};

/// A route handler for deleting an expense.
pub async fn delete_expense_endpoint(
    State(state): State<ExpenseState>,
    ApiPath(expense_id): ApiPath<ExpenseId>,
) -> Result<Json<MessageResponse>, Error> {
    let connection = state.connection()?;

    match delete_expense(expense_id, &connection) {
        Ok(()) => {
            tracing::info!("Deleted expense {expense_id}");
            Ok(Json(MessageResponse::new("Expense deleted")))
        }
        Err(Error::DeleteMissingExpense) => Err(Error::DeleteMissingExpense),
        Err(error) => {
            tracing::error!("Could not delete expense {expense_id}: {error}");
            Err(error)
        }
    }
}
