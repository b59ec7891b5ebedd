//! The page shown when a dashboard page cannot be rendered.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// A 500 page naming the dashboard page that failed.
#[derive(Debug, Clone, Copy)]
pub struct InternalServerError {
    page: &'static str,
}

impl InternalServerError {
    /// The error page for when `page`, e.g. "analytics", could not be rendered.
    pub fn rendering(page: &'static str) -> Self {
        Self { page }
    }
}

impl IntoResponse for InternalServerError {
    fn into_response(self) -> Response {
        let description = format!("Sorry, the {} page could not be shown.", self.page);
        let page = error_view(
            "Internal Server Error",
            "500",
            &description,
            "Restart the dashboard and check its log file for details.",
        );

        (StatusCode::INTERNAL_SERVER_ERROR, Html(page.into_string())).into_response()
    }
}
