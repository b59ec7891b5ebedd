//! The endpoint URIs for the REST API and the dashboard.
//!
//! For endpoints that take a parameter, e.g., '/api/expenses/{expense_id}', use [format_endpoint].

/// The root route. On the API server this is the liveness marker, on the
/// dashboard it redirects to the add expense page.
pub const ROOT: &str = "/";
/// The route to list and create expenses.
pub const EXPENSES: &str = "/api/expenses";
/// The route to get, update and delete a single expense.
pub const EXPENSE: &str = "/api/expenses/{expense_id}";
/// The route for the total spent per category.
pub const CATEGORY_TOTALS: &str = "/api/analytics/category-totals";
/// The route for the total spent per month.
pub const MONTHLY_TOTALS: &str = "/api/analytics/monthly-totals";

/// The dashboard page with the form for adding or editing an expense.
pub const ADD_EXPENSE_VIEW: &str = "/add";
/// The dashboard page listing all expenses.
pub const EXPENSES_VIEW: &str = "/expenses";
/// The dashboard page with the charts and summary statistics.
pub const ANALYTICS_VIEW: &str = "/analytics";
/// The dashboard route the expense form is submitted to.
pub const SUBMIT_EXPENSE: &str = "/expenses";
/// The dashboard route for starting to edit an expense.
pub const EDIT_EXPENSE: &str = "/expenses/{expense_id}/edit";
/// The dashboard route for abandoning an edit.
pub const CANCEL_EDIT: &str = "/edit/cancel";
/// The dashboard route for deleting an expense.
pub const DELETE_EXPENSE: &str = "/expenses/{expense_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/expenses/{expense_id}', '{expense_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
