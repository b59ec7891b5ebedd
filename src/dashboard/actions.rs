//! Route handlers for the dashboard's form submissions and row actions.
//!
//! On success each handler tells htmx to load the next page with an
//! `HX-Redirect`. On failure it responds with an error alert that htmx swaps
//! into the page's alert container.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{Form, FormRejection};
use axum_htmx::HxRedirect;
use serde::Deserialize;
use time::Date;

use crate::{Error, ExpenseId, ExpenseInput, dashboard::DashboardState, endpoints};

/// The fields of the add/edit expense form.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseForm {
    /// What the money was spent on.
    pub description: String,
    /// How much was spent.
    pub amount: f64,
    /// The selected category.
    pub category: String,
    /// The day the money was spent.
    #[serde(with = "crate::expense::iso_date")]
    pub date: Date,
}

impl ExpenseForm {
    /// Check the form before it is sent to the API.
    ///
    /// # Errors
    /// Returns [Error::IncompleteForm] if the description is blank or the amount is not positive.
    fn into_input(self) -> Result<ExpenseInput, Error> {
        if self.description.trim().is_empty() || !(self.amount.is_finite() && self.amount > 0.0) {
            return Err(Error::IncompleteForm);
        }

        Ok(ExpenseInput::new(
            self.description.trim(),
            self.amount,
            &self.category,
            self.date,
        ))
    }
}

fn redirect_to(endpoint: &str) -> Response {
    (HxRedirect(endpoint.to_owned()), StatusCode::SEE_OTHER).into_response()
}

/// The root path '/' redirects to the add expense page.
pub async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::ADD_EXPENSE_VIEW)
}

/// Create a new expense, or update the expense being edited, from the submitted form.
pub async fn submit_expense_endpoint(
    State(state): State<DashboardState>,
    form: Result<Form<ExpenseForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!("rejected expense form: {rejection}");
            return Error::IncompleteForm.into_alert_response();
        }
    };

    let input = match form.into_input() {
        Ok(input) => input,
        Err(error) => return error.into_alert_response(),
    };

    let editing_id = match state.with_session(|session| session.editing_id()) {
        Ok(editing_id) => editing_id,
        Err(error) => return error.into_alert_response(),
    };

    match editing_id {
        Some(id) => update_expense(&state, id, &input).await,
        None => create_expense(&state, &input).await,
    }
}

async fn create_expense(state: &DashboardState, input: &ExpenseInput) -> Response {
    if let Err(error) = state.api.create_expense(input).await {
        tracing::error!("could not create expense: {error}");
        return error.into_alert_response();
    }

    if let Err(error) = state.with_session(|session| session.set_flash("Expense added successfully!")) {
        return error.into_alert_response();
    }

    redirect_to(endpoints::ADD_EXPENSE_VIEW)
}

async fn update_expense(state: &DashboardState, id: ExpenseId, input: &ExpenseInput) -> Response {
    match state.api.update_expense(id, input).await {
        Ok(()) => {}
        Err(Error::NotFound) => {
            tracing::warn!("expense {id} was deleted while it was being edited");
            // The edit cannot be finished, so drop it rather than leave the form stuck.
            if let Err(error) = state.with_session(|session| session.remove(id)) {
                return error.into_alert_response();
            }

            return Error::UpdateMissingExpense.into_alert_response();
        }
        Err(error) => {
            tracing::error!("could not update expense {id}: {error}");
            return error.into_alert_response();
        }
    }

    let finished = state.with_session(|session| {
        // Another request may have started a different edit in the meantime.
        if session.editing_id() == Some(id) {
            session.finish_edit();
        }

        session.set_flash("Expense updated successfully!");
    });

    if let Err(error) = finished {
        return error.into_alert_response();
    }

    redirect_to(endpoints::ADD_EXPENSE_VIEW)
}

/// Start editing an expense and send the user to the form.
pub async fn start_edit_endpoint(
    State(state): State<DashboardState>,
    Path(expense_id): Path<ExpenseId>,
) -> Response {
    let expenses = match state.api.list_expenses().await {
        Ok(expenses) => expenses,
        Err(error) => return error.into_alert_response(),
    };

    let started = state.with_session(|session| {
        session.refresh(expenses);
        session.start_edit(expense_id)
    });

    match started {
        Ok(Ok(())) => redirect_to(endpoints::ADD_EXPENSE_VIEW),
        Ok(Err(error)) | Err(error) => error.into_alert_response(),
    }
}

/// Abandon the edit in progress and show a blank form.
pub async fn cancel_edit_endpoint(State(state): State<DashboardState>) -> Response {
    match state.with_session(|session| session.cancel_edit()) {
        Ok(()) => redirect_to(endpoints::ADD_EXPENSE_VIEW),
        Err(error) => error.into_alert_response(),
    }
}

/// Delete an expense and reload the expense list.
pub async fn delete_expense_endpoint(
    State(state): State<DashboardState>,
    Path(expense_id): Path<ExpenseId>,
) -> Response {
    match state.api.delete_expense(expense_id).await {
        Ok(()) => {}
        Err(Error::NotFound) => {
            if let Err(error) = state.with_session(|session| session.remove(expense_id)) {
                return error.into_alert_response();
            }

            return Error::DeleteMissingExpense.into_alert_response();
        }
        Err(error) => {
            tracing::error!("could not delete expense {expense_id}: {error}");
            return error.into_alert_response();
        }
    }

    let removed = state.with_session(|session| {
        session.remove(expense_id);
        session.set_flash("Expense deleted successfully!");
    });

    match removed {
        Ok(()) => redirect_to(endpoints::EXPENSES_VIEW),
        Err(error) => error.into_alert_response(),
    }
}
