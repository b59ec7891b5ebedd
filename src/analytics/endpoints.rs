//! Route handlers for the read-only analytics endpoints.

use axum::{Json, extract::State};

use crate::{
    Error,
    analytics::{CategoryTotal, MonthlyTotal, get_category_totals, get_monthly_totals},
    expense::ExpenseState,
};

/// Responds with the total spent per category, largest first.
pub async fn get_category_totals_endpoint(
    State(state): State<ExpenseState>,
) -> Result<Json<Vec<CategoryTotal>>, Error> {
    let connection = state.connection()?;

    get_category_totals(&connection)
        .inspect_err(|error| tracing::error!("could not get category totals: {error}"))
        .map(Json)
}

/// Responds with the total spent per month, earliest first.
pub async fn get_monthly_totals_endpoint(
    State(state): State<ExpenseState>,
) -> Result<Json<Vec<MonthlyTotal>>, Error> {
    let connection = state.connection()?;

    get_monthly_totals(&connection)
        .inspect_err(|error| tracing::error!("could not get monthly totals: {error}"))
        .map(Json)
}
