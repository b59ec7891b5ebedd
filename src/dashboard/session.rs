//! The dashboard's client-side state.
//!
//! A [Session] holds the dashboard's copy of the expense list (the mirror)
//! and which expense, if any, is being edited. Handlers change it only
//! through the transition methods below.

use time::Date;

use crate::{Error, Expense, ExpenseId};

/// The category selected in the form when adding a new expense.
pub const DEFAULT_CATEGORY: &str = "Food";

/// The values to pre-populate the expense form with.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    /// The description, empty for a new expense.
    pub description: String,
    /// The amount, `None` for a new expense.
    pub amount: Option<f64>,
    /// The selected category.
    pub category: String,
    /// The selected date.
    pub date: Date,
}

/// The state of the dashboard between requests.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Session {
    expenses: Vec<Expense>,
    editing_id: Option<ExpenseId>,
    flash: Option<String>,
}

impl Session {
    /// The last fetched expense list.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Replace the mirror with a freshly fetched expense list.
    ///
    /// An edit in progress is abandoned if its expense is no longer in the list.
    pub fn refresh(&mut self, expenses: Vec<Expense>) {
        self.expenses = expenses;

        if let Some(id) = self.editing_id {
            if !self.expenses.iter().any(|expense| expense.id == id) {
                tracing::debug!("expense {id} disappeared while being edited");
                self.editing_id = None;
            }
        }
    }

    /// Start editing the expense with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` is not in the mirror.
    pub fn start_edit(&mut self, id: ExpenseId) -> Result<(), Error> {
        if !self.expenses.iter().any(|expense| expense.id == id) {
            return Err(Error::NotFound);
        }

        self.editing_id = Some(id);

        Ok(())
    }

    /// Abandon the edit in progress, if any.
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
    }

    /// Mark the edit in progress as saved and return the ID that was being edited.
    pub fn finish_edit(&mut self) -> Option<ExpenseId> {
        self.editing_id.take()
    }

    /// Drop the expense with `id` from the mirror, ending its edit if one is in progress.
    pub fn remove(&mut self, id: ExpenseId) {
        self.expenses.retain(|expense| expense.id != id);

        if self.editing_id == Some(id) {
            self.editing_id = None;
        }
    }

    /// The ID of the expense being edited.
    pub fn editing_id(&self) -> Option<ExpenseId> {
        self.editing_id
    }

    /// The expense being edited.
    pub fn editing(&self) -> Option<&Expense> {
        let id = self.editing_id?;

        self.expenses.iter().find(|expense| expense.id == id)
    }

    /// The values for the expense form: those of the expense being edited, or
    /// blank values dated `today` when adding a new expense.
    pub fn form_values(&self, today: Date) -> FormValues {
        match self.editing() {
            Some(expense) => FormValues {
                description: expense.description.clone(),
                amount: Some(expense.amount),
                category: expense.category.clone(),
                date: expense.date,
            },
            None => FormValues {
                description: String::new(),
                amount: None,
                category: DEFAULT_CATEGORY.to_owned(),
                date: today,
            },
        }
    }

    /// The sum of the amounts in the mirror.
    pub fn running_total(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }

    /// Store a message to show on the next page view.
    pub fn set_flash(&mut self, message: &str) {
        self.flash = Some(message.to_owned());
    }

    /// Take the stored message so it is shown only once.
    pub fn take_flash(&mut self) -> Option<String> {
        self.flash.take()
    }
}
