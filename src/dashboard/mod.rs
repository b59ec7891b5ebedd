//! The expense tracker dashboard.
//!
//! Renders the add/edit form, the expense list and the analytics page as
//! HTML, and talks to the REST API for every read and write. The only state
//! the dashboard keeps itself is a [session](session::Session) with a mirror
//! of the expense list and the id of the expense being edited.

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::{endpoints, not_found::get_404_not_found};

mod actions;
mod analytics_page;
mod api_client;
mod charts;
mod expenses_page;
mod form_page;
mod session;
mod state;
mod summary;

pub use api_client::ApiClient;
pub use state::DashboardState;

use actions::{
    cancel_edit_endpoint, delete_expense_endpoint, get_index_page, start_edit_endpoint,
    submit_expense_endpoint,
};
use analytics_page::get_analytics_page;
use expenses_page::get_expenses_page;
use form_page::get_add_expense_page;

/// Return a router with all the dashboard's pages and actions.
pub fn build_dashboard_router(state: DashboardState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::ADD_EXPENSE_VIEW, get(get_add_expense_page))
        .route(
            endpoints::EXPENSES_VIEW,
            get(get_expenses_page).post(submit_expense_endpoint),
        )
        .route(endpoints::ANALYTICS_VIEW, get(get_analytics_page))
        .route(endpoints::EDIT_EXPENSE, post(start_edit_endpoint))
        .route(endpoints::CANCEL_EDIT, post(cancel_edit_endpoint))
        .route(endpoints::DELETE_EXPENSE, delete(delete_expense_endpoint))
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;

    use crate::{
        dashboard::{DashboardState, build_dashboard_router},
        endpoints,
        test_utils::spawn_api,
    };

    async fn get_test_server(seed_samples: bool) -> TestServer {
        let state = DashboardState::new(spawn_api(seed_samples).await, "Etc/UTC");

        TestServer::new(build_dashboard_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn root_redirects_to_add_expense_page() {
        let server = get_test_server(false).await;

        let response = server.get(endpoints::ROOT).await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), endpoints::ADD_EXPENSE_VIEW);
    }

    #[tokio::test]
    async fn pages_render() {
        let server = get_test_server(true).await;

        for page in [
            endpoints::ADD_EXPENSE_VIEW,
            endpoints::EXPENSES_VIEW,
            endpoints::ANALYTICS_VIEW,
        ] {
            server.get(page).await.assert_status_ok();
        }
    }

    #[tokio::test]
    async fn unknown_page_is_not_found() {
        let server = get_test_server(false).await;

        server
            .get("/does-not-exist")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn form_submission_adds_expense() {
        let server = get_test_server(false).await;

        let response = server
            .post(endpoints::SUBMIT_EXPENSE)
            .text("description=Lunch&amount=12.50&category=Food&date=2024-02-01")
            .content_type("application/x-www-form-urlencoded")
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("hx-redirect"), endpoints::ADD_EXPENSE_VIEW);
        let expenses_page = server.get(endpoints::EXPENSES_VIEW).await.text();
        assert!(expenses_page.contains("Lunch"));
        assert!(expenses_page.contains("$12.50"));
    }

    #[tokio::test]
    async fn malformed_form_is_unprocessable() {
        let server = get_test_server(false).await;

        let response = server
            .post(endpoints::SUBMIT_EXPENSE)
            .text("description=Lunch&amount=&category=Food&date=2024-02-01")
            .content_type("application/x-www-form-urlencoded")
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.text().contains("Please fill in all required fields"));
        let expenses_page = server.get(endpoints::EXPENSES_VIEW).await.text();
        assert!(!expenses_page.contains("Lunch"));
    }
}
