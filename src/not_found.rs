//! Responses for requests to routes that do not exist.

use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;

use crate::html::error_view;

/// The API fallback: a JSON body in the same shape as the other API errors.
pub async fn get_404_not_found_json() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" }))).into_response()
}

/// The dashboard fallback.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(
            error_view(
                "Not Found",
                "404",
                "Something's missing.",
                "Sorry, we can't find that page.",
            )
            .into_string(),
        ),
    )
        .into_response()
}
