//! Response bodies for the mutating expense endpoints.

use serde::{Deserialize, Serialize};

use crate::database_id::ExpenseId;

/// A response that only carries a human-readable confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// e.g. "Expense updated".
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

/// The response to creating an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// Always "Expense created".
    pub message: String,
    /// The ID assigned to the new expense.
    pub id: ExpenseId,
}

impl CreatedResponse {
    pub fn new(id: ExpenseId) -> Self {
        Self {
            message: "Expense created".to_owned(),
            id,
        }
    }
}
