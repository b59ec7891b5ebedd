//! Router configuration for the REST API.

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    AppState,
    analytics::{get_category_totals_endpoint, get_monthly_totals_endpoint},
    endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, edit_expense_endpoint,
        get_expense_endpoint, list_expenses_endpoint,
    },
    not_found::get_404_not_found_json,
};

/// Return a router with all the API's routes.
///
/// Any origin may call the API with any method and headers.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(endpoints::ROOT, get(get_api_root))
        .route(
            endpoints::EXPENSES,
            post(create_expense_endpoint).get(list_expenses_endpoint),
        )
        .route(
            endpoints::EXPENSE,
            get(get_expense_endpoint)
                .put(edit_expense_endpoint)
                .delete(delete_expense_endpoint),
        )
        .route(
            endpoints::CATEGORY_TOTALS,
            get(get_category_totals_endpoint),
        )
        .route(endpoints::MONTHLY_TOTALS, get(get_monthly_totals_endpoint))
        .fallback(get_404_not_found_json)
        .layer(cors)
        .with_state(state)
}

/// The liveness marker.
async fn get_api_root() -> Json<Value> {
    Json(json!({ "message": "Expense Tracker API" }))
}
