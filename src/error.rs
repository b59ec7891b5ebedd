//! Defines the app level error type and its conversions to JSON responses and HTML alerts.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::alert::Alert;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request body or path could not be parsed into the expected shape,
    /// e.g. a missing field, a string where a number was expected or a date
    /// that is not `YYYY-MM-DD`.
    ///
    /// Raised before storage is touched.
    #[error("invalid request: {0}")]
    InvalidPayload(String),

    /// The payload had the right shape but its values are not a valid expense,
    /// e.g. an empty description or a non-positive amount.
    #[error("invalid expense: {0}")]
    InvalidExpense(String),

    /// The dashboard form was submitted without a description or with an
    /// amount that is not positive.
    #[error("the expense form is missing required fields")]
    IncompleteForm,

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the ID is
    /// correct and that the expense has not been deleted.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update an expense that does not exist
    #[error("tried to update an expense that is not in the database")]
    UpdateMissingExpense,

    /// Tried to delete an expense that does not exist
    #[error("tried to delete an expense that is not in the database")]
    DeleteMissingExpense,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// Could not acquire the lock on the dashboard session.
    #[error("could not acquire the session lock")]
    SessionLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The dashboard could not reach the REST API.
    #[error("could not connect to the API: {0}")]
    ApiUnavailable(String),

    /// The REST API answered with an error status other than 404.
    #[error("the API rejected the request with status {status}: {detail}")]
    ApiRejected {
        /// The HTTP status code returned by the API.
        status: u16,
        /// The `detail` message from the response body.
        detail: String,
    },

    /// The REST API answered with a body the dashboard could not decode.
    #[error("could not decode the API response: {0}")]
    InvalidApiResponse(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidPayload(_) | Error::InvalidExpense(_) | Error::IncompleteForm => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Error::NotFound | Error::UpdateMissingExpense | Error::DeleteMissingExpense => {
                StatusCode::NOT_FOUND
            }
            Error::ApiUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::ApiRejected { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Error::InvalidApiResponse(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let detail = match self {
            Error::NotFound | Error::UpdateMissingExpense | Error::DeleteMissingExpense => {
                "Expense not found".to_owned()
            }
            Error::InvalidPayload(reason) | Error::InvalidExpense(reason) => reason,
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                "Internal Server Error".to_owned()
            }
        };

        (status_code, Json(json!({ "detail": detail }))).into_response()
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let status_code = self.status_code();

        (status_code, self.into_alert().into_html()).into_response()
    }

    /// Convert the error into an alert that explains it to a dashboard user.
    pub(crate) fn into_alert(self) -> Alert {
        match self {
            Error::IncompleteForm => Alert::Error {
                message: "Invalid expense".to_owned(),
                details: "Please fill in all required fields with valid data".to_owned(),
            },
            Error::InvalidPayload(reason) | Error::InvalidExpense(reason) => Alert::Error {
                message: "Invalid expense".to_owned(),
                details: reason,
            },
            Error::NotFound => Alert::Error {
                message: "Expense not found".to_owned(),
                details: "Try refreshing the page to see the latest expenses.".to_owned(),
            },
            Error::UpdateMissingExpense => Alert::Error {
                message: "Failed to update expense".to_owned(),
                details: "The expense could not be found.".to_owned(),
            },
            Error::DeleteMissingExpense => Alert::Error {
                message: "Failed to delete expense".to_owned(),
                details: "The expense could not be found. \
                    Try refreshing the page to see if the expense has already been deleted."
                    .to_owned(),
            },
            Error::ApiUnavailable(_) => Alert::Error {
                message: "Could not connect to the server".to_owned(),
                details: "Make sure the backend is running.".to_owned(),
            },
            Error::ApiRejected { detail, .. } => Alert::Error {
                message: "The server rejected the request".to_owned(),
                details: detail,
            },
            Error::InvalidTimezoneError(timezone) => Alert::Error {
                message: "Invalid Timezone Settings".to_owned(),
                details: format!(
                    "Could not get local timezone \"{timezone}\". Check your dashboard settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            },
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details: "An unexpected error occurred, check the server logs for more details."
                        .to_owned(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::Value;

    use crate::Error;

    async fn body_json(error: Error) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("could not read body");

        (status, serde_json::from_slice(&body).expect("body is not JSON"))
    }

    #[tokio::test]
    async fn not_found_variants_render_expense_not_found() {
        for error in [
            Error::NotFound,
            Error::UpdateMissingExpense,
            Error::DeleteMissingExpense,
        ] {
            let (status, body) = body_json(error).await;

            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["detail"], "Expense not found");
        }
    }

    #[tokio::test]
    async fn validation_errors_are_unprocessable() {
        let (status, body) =
            body_json(Error::InvalidExpense("amount must be positive".to_owned())).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "amount must be positive");
    }

    #[tokio::test]
    async fn storage_errors_hide_details() {
        let (status, body) = body_json(Error::SqlError(rusqlite::Error::InvalidQuery)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Internal Server Error");
    }

    #[test]
    fn no_rows_maps_to_not_found() {
        assert_eq!(
            Error::from(rusqlite::Error::QueryReturnedNoRows),
            Error::NotFound
        );
    }

    #[test]
    fn api_rejection_keeps_status_for_alerts() {
        let response = Error::ApiRejected {
            status: 422,
            detail: "description must not be empty".to_owned(),
        }
        .into_alert_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn unreachable_api_is_service_unavailable() {
        let response = Error::ApiUnavailable("connection refused".to_owned()).into_alert_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
