//! A personal expense tracker.
//!
//! This library provides two HTTP services:
//! - a JSON REST API over a single SQLite `expenses` table (see [build_router]),
//! - a dashboard that renders HTML pages and talks to the REST API over HTTP
//!   (see [build_dashboard_router]).

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod analytics;
mod app_state;
mod dashboard;
mod database_id;
mod db;
mod endpoints;
mod error;
mod expense;
mod extract;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod timezone;

#[cfg(test)]
mod test_utils;

pub use analytics::{CategoryTotal, MonthlyTotal, get_category_totals, get_monthly_totals};
pub use app_state::AppState;
pub use dashboard::{ApiClient, DashboardState, build_dashboard_router};
pub use database_id::ExpenseId;
pub use db::initialize as initialize_db;
pub use error::Error;
pub use expense::{
    Expense, ExpenseInput, SAMPLE_EXPENSES, count_expenses, create_expense, delete_expense,
    get_expense, list_expenses, seed_sample_expenses, update_expense,
};
pub use logging::{
    LOG_BODY_LENGTH_LIMIT, add_tracing_layer, init_tracing, logging_middleware,
};
pub use routing::build_router;

/// How long in-flight requests get to finish once shutdown starts.
const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(1);

/// Wait for ctrl+c or, on Unix, SIGTERM and then tell the server behind
/// `handle` to shut down gracefully.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let signal_name = shutdown_signal().await;

    tracing::info!("Received {signal_name}, shutting down.");
    handle.graceful_shutdown(Some(SHUTDOWN_GRACE_PERIOD));
}

/// Resolve with the name of the first shutdown signal received.
async fn shutdown_signal() -> &'static str {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Could not listen for ctrl+c: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                tracing::error!("Could not listen for SIGTERM: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => "ctrl+c",
        _ = terminate => "SIGTERM",
    }
}
