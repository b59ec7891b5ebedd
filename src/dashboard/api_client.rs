//! A typed HTTP client for the expense tracker REST API.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    CategoryTotal, Error, Expense, ExpenseId, ExpenseInput, MonthlyTotal,
    expense::{CreatedResponse, MessageResponse},
};

/// The body the API sends with every error status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Calls the REST API on behalf of the dashboard.
///
/// Cloning is cheap: clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`, e.g. "http://localhost:8000/api".
    ///
    /// Requests that take longer than `timeout` fail with [Error::ApiUnavailable].
    ///
    /// # Errors
    /// Returns [Error::ApiUnavailable] if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        // The API is our own backend, so system proxies are never involved.
        let client = Client::builder()
            .no_proxy()
            .timeout(timeout)
            .build()
            .map_err(|error| Error::ApiUnavailable(error.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Fetch every expense, most recent date first.
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, Error> {
        send(self.client.get(self.url("/expenses"))).await
    }

    /// Fetch a single expense.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if the API has no expense with `id`.
    pub async fn get_expense(&self, id: ExpenseId) -> Result<Expense, Error> {
        send(self.client.get(self.url(&format!("/expenses/{id}")))).await
    }

    /// Create an expense and return the ID the API assigned to it.
    pub async fn create_expense(&self, input: &ExpenseInput) -> Result<ExpenseId, Error> {
        let created: CreatedResponse =
            send(self.client.post(self.url("/expenses")).json(input)).await?;

        Ok(created.id)
    }

    /// Replace the description, amount, category and date of the expense with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if the API has no expense with `id`.
    pub async fn update_expense(&self, id: ExpenseId, input: &ExpenseInput) -> Result<(), Error> {
        let _: MessageResponse = send(
            self.client
                .put(self.url(&format!("/expenses/{id}")))
                .json(input),
        )
        .await?;

        Ok(())
    }

    /// Delete the expense with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if the API has no expense with `id`.
    pub async fn delete_expense(&self, id: ExpenseId) -> Result<(), Error> {
        let _: MessageResponse =
            send(self.client.delete(self.url(&format!("/expenses/{id}")))).await?;

        Ok(())
    }

    /// Fetch the total spent per category, largest first.
    pub async fn category_totals(&self) -> Result<Vec<CategoryTotal>, Error> {
        send(self.client.get(self.url("/analytics/category-totals"))).await
    }

    /// Fetch the total spent per month, earliest first.
    pub async fn monthly_totals(&self) -> Result<Vec<MonthlyTotal>, Error> {
        send(self.client.get(self.url("/analytics/monthly-totals"))).await
    }
}

/// Send `request` and decode a successful response body as `T`.
///
/// Transport failures become [Error::ApiUnavailable], a 404 becomes
/// [Error::NotFound] and any other error status becomes [Error::ApiRejected].
async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, Error> {
    let response = request.send().await.map_err(|error| {
        tracing::error!("could not reach the API: {error}");
        Error::ApiUnavailable(error.to_string())
    })?;

    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Err(Error::NotFound);
    }

    if !status.is_success() {
        let detail = match response.json::<ErrorBody>().await {
            Ok(body) => body.detail,
            Err(_) => status.to_string(),
        };
        tracing::warn!("the API rejected a request with status {status}: {detail}");

        return Err(Error::ApiRejected {
            status: status.as_u16(),
            detail,
        });
    }

    response.json::<T>().await.map_err(|error| {
        tracing::error!("could not decode the API response: {error}");
        Error::InvalidApiResponse(error.to_string())
    })
}
