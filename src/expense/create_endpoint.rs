//! Defines the endpoint for creating a new expense.

use axum::{Json, extract::State};

use crate::{
    Error,
    expense::{ExpenseInput, ExpenseState, core::create_expense, responses::CreatedResponse},
    extract::ApiJson,
};

/// A route handler for creating a new expense, responds with the new expense's ID.
pub async fn create_expense_endpoint(
    State(state): State<ExpenseState>,
    ApiJson(input): ApiJson<ExpenseInput>,
) -> Result<Json<CreatedResponse>, Error> {
    input.validate()?;

    let connection = state.connection()?;
    let expense = create_expense(&input, &connection)
        .inspect_err(|error| tracing::error!("could not create expense: {error}"))?;

    tracing::info!("Created expense {}", expense.id);

    Ok(Json(CreatedResponse::new(expense.id)))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Json, extract::State};
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        db::initialize,
        expense::{
            ExpenseInput, ExpenseState, count_expenses, create_expense_endpoint, get_expense,
        },
        extract::ApiJson,
    };

    fn get_test_state() -> ExpenseState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        ExpenseState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    #[tokio::test]
    async fn can_create_expense() {
        let state = get_test_state();
        let input = ExpenseInput::new("Groceries", 85.5, "Food", date!(2024 - 01 - 15));

        let Json(response) = create_expense_endpoint(State(state.clone()), ApiJson(input.clone()))
            .await
            .expect("could not create expense");

        assert_eq!(response.message, "Expense created");
        let connection = state.db_connection.lock().unwrap();
        let expense = get_expense(response.id, &connection).unwrap();
        assert_eq!(expense.description, input.description);
        assert_eq!(expense.amount, input.amount);
    }

    #[tokio::test]
    async fn rejects_invalid_expense_without_writing() {
        let state = get_test_state();
        let input = ExpenseInput::new("", -3.0, "Food", date!(2024 - 01 - 15));

        let result = create_expense_endpoint(State(state.clone()), ApiJson(input)).await;

        assert!(matches!(result, Err(Error::InvalidExpense(_))));
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(count_expenses(&connection).unwrap(), 0);
    }
}
