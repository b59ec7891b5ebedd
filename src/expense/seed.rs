//! Demonstration data that is inserted when the server starts.

use rusqlite::{Connection, TransactionBehavior, params};
use time::{Date, macros::date};

use crate::{
    Error,
    expense::{ExpenseInput, create_expense},
};

/// A sample expense: description, amount, category and date.
pub type SampleExpense = (&'static str, f64, &'static str, Date);

/// The expenses inserted by [seed_sample_expenses].
pub const SAMPLE_EXPENSES: [SampleExpense; 5] = [
    ("Groceries", 85.50, "Food", date!(2024 - 01 - 15)),
    ("Movie Tickets", 25.00, "Entertainment", date!(2024 - 01 - 14)),
    ("Gas", 45.75, "Transportation", date!(2024 - 01 - 13)),
    ("Coffee", 4.50, "Food", date!(2024 - 01 - 12)),
    ("Netflix", 15.99, "Entertainment", date!(2024 - 01 - 10)),
];

/// Insert each of the [SAMPLE_EXPENSES] that is not already in the database.
///
/// A sample counts as present when a row has the same description, amount,
/// category and date. Existing rows are never modified, so running this on
/// every start leaves exactly one copy of each sample.
///
/// Returns the number of rows inserted.
///
/// # Errors
/// Returns an [Error::SqlError] if a query fails, in which case none of the
/// samples are inserted.
pub fn seed_sample_expenses(connection: &Connection) -> Result<usize, Error> {
    let transaction =
        rusqlite::Transaction::new_unchecked(connection, TransactionBehavior::Immediate)?;
    let mut inserted = 0;

    for (description, amount, category, date) in SAMPLE_EXPENSES {
        let sample = ExpenseInput::new(description, amount, category, date);

        if contains_expense(&sample, &transaction)? {
            continue;
        }

        create_expense(&sample, &transaction)?;
        inserted += 1;
    }

    transaction.commit()?;

    if inserted > 0 {
        tracing::info!("Inserted {inserted} sample expenses");
    } else {
        tracing::debug!("Sample expenses already present, nothing to insert");
    }

    Ok(inserted)
}

/// Whether a row with the same natural key as `expense` exists.
fn contains_expense(expense: &ExpenseInput, connection: &Connection) -> Result<bool, Error> {
    connection
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM expenses
                WHERE description = ?1 AND amount = ?2 AND category = ?3 AND date = ?4
            )",
            params![
                expense.description,
                expense.amount,
                expense.category,
                expense.date
            ],
            |row| row.get(0),
        )
        .map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        db::initialize,
        expense::{
            ExpenseInput, SAMPLE_EXPENSES, count_expenses, create_expense, list_expenses,
            seed::contains_expense, seed_sample_expenses, update_expense,
        },
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    #[test]
    fn seeds_five_samples() {
        let conn = get_test_connection();

        let inserted = seed_sample_expenses(&conn).expect("could not seed");

        assert_eq!(inserted, 5);
        assert_eq!(count_expenses(&conn).unwrap(), 5);
    }

    #[test]
    fn seeding_twice_does_not_duplicate() {
        let conn = get_test_connection();

        seed_sample_expenses(&conn).unwrap();
        let inserted = seed_sample_expenses(&conn).unwrap();

        assert_eq!(inserted, 0);
        assert_eq!(count_expenses(&conn).unwrap(), 5);
    }

    #[test]
    fn initialize_and_seed_twice_leaves_five_rows() {
        let conn = get_test_connection();

        for _ in 0..2 {
            initialize(&conn).unwrap();
            seed_sample_expenses(&conn).unwrap();
        }

        assert_eq!(count_expenses(&conn).unwrap(), 5);
    }

    #[test]
    fn only_missing_samples_are_inserted() {
        let conn = get_test_connection();
        let (description, amount, category, date) = SAMPLE_EXPENSES[0];
        create_expense(
            &ExpenseInput::new(description, amount, category, date),
            &conn,
        )
        .unwrap();

        let inserted = seed_sample_expenses(&conn).unwrap();

        assert_eq!(inserted, 4);
        assert_eq!(count_expenses(&conn).unwrap(), 5);
    }

    #[test]
    fn edited_sample_is_not_overwritten() {
        let conn = get_test_connection();
        seed_sample_expenses(&conn).unwrap();
        let coffee = list_expenses(&conn)
            .unwrap()
            .into_iter()
            .find(|expense| expense.description == "Coffee")
            .unwrap();
        let edited = ExpenseInput::new("Flat white", 5.0, "Food", date!(2024 - 01 - 12));
        update_expense(coffee.id, &edited, &conn).unwrap();

        seed_sample_expenses(&conn).unwrap();

        // The edited row stays and the original sample is re-inserted next to it.
        let expenses = list_expenses(&conn).unwrap();
        assert_eq!(expenses.len(), 6);
        assert!(
            expenses
                .iter()
                .any(|expense| expense.id == coffee.id && expense.description == "Flat white")
        );
    }

    #[test]
    fn natural_key_requires_all_fields_to_match() {
        let conn = get_test_connection();
        let coffee = ExpenseInput::new("Coffee", 4.5, "Food", date!(2024 - 01 - 12));
        create_expense(&coffee, &conn).unwrap();

        let different_amount = ExpenseInput {
            amount: 4.75,
            ..coffee.clone()
        };

        assert!(contains_expense(&coffee, &conn).unwrap());
        assert!(!contains_expense(&different_amount, &conn).unwrap());
    }
}
