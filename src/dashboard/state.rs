//! The state shared by the dashboard's route handlers.

use std::sync::{Arc, Mutex};

use crate::{Error, alert::Alert, dashboard::ApiClient, dashboard::session::Session};

/// The state of the dashboard server.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The client for the REST API.
    pub api: ApiClient,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
    pub(super) session: Arc<Mutex<Session>>,
}

impl DashboardState {
    /// Create the dashboard state with an empty session.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    pub fn new(api: ApiClient, local_timezone: &str) -> Self {
        Self {
            api,
            local_timezone: local_timezone.to_owned(),
            session: Arc::new(Mutex::new(Session::default())),
        }
    }

    /// Run `f` with exclusive access to the session.
    ///
    /// The lock is released before this function returns, so it is never
    /// held across a request to the API.
    ///
    /// # Errors
    /// Returns [Error::SessionLockError] if the lock is poisoned.
    pub(super) fn with_session<T>(&self, f: impl FnOnce(&mut Session) -> T) -> Result<T, Error> {
        let mut session = self
            .session
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire session lock: {error}"))
            .map_err(|_| Error::SessionLockError)?;

        Ok(f(&mut session))
    }

    /// Fetch the latest expenses into the session and return a copy of it,
    /// along with the alerts to show on the page.
    ///
    /// If the API cannot be reached the session keeps its last-known
    /// expenses and an error alert is returned instead.
    ///
    /// # Errors
    /// Returns [Error::SessionLockError] if the session lock is poisoned.
    pub(super) async fn refreshed_session(&self) -> Result<(Session, Vec<Alert>), Error> {
        let fetched = self.api.list_expenses().await;

        self.with_session(|session| {
            let mut alerts = Vec::new();

            if let Some(message) = session.take_flash() {
                alerts.push(Alert::Success {
                    message,
                    details: String::new(),
                });
            }

            match fetched {
                Ok(expenses) => session.refresh(expenses),
                Err(error) => alerts.push(error.into_alert()),
            }

            (session.clone(), alerts)
        })
    }
}
