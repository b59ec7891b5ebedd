//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, db::initialize, expense::seed_sample_expenses};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the expenses table if it does not
    /// exist. When `seed_samples` is true, the sample expenses that are missing are inserted.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized or seeded.
    pub fn new(db_connection: Connection, seed_samples: bool) -> Result<Self, Error> {
        initialize(&db_connection)?;

        if seed_samples {
            seed_sample_expenses(&db_connection)?;
        }

        Ok(Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
        })
    }
}
