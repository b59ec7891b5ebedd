//! The page with the form for adding a new expense or editing an existing one.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::OffsetDateTime;

use crate::{
    alert::Alert,
    dashboard::{
        DashboardState,
        session::{FormValues, Session},
    },
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, base, dollar_input_styles, loading_spinner,
    },
    internal_server_error::InternalServerError,
    navigation::NavBar,
    timezone::today_in,
};

/// The categories offered in the form.
pub(super) const SUGGESTED_CATEGORIES: [&str; 6] = [
    "Food",
    "Transportation",
    "Entertainment",
    "Shopping",
    "Bills",
    "Other",
];

/// Display the add expense form, or the edit form if an edit is in progress.
pub async fn get_add_expense_page(State(state): State<DashboardState>) -> Response {
    let (session, mut alerts) = match state.refreshed_session().await {
        Ok(snapshot) => snapshot,
        Err(error) => {
            tracing::error!("could not render the expense form: {error}");
            return InternalServerError::rendering("expense form").into_response();
        }
    };

    let today = match today_in(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => {
            alerts.push(error.into_alert());
            OffsetDateTime::now_utc().date()
        }
    };

    form_page_view(&session, &session.form_values(today), alerts).into_response()
}

/// The category options, with `selected` appended if it is not one of the
/// suggestions so that editing never silently changes an expense's category.
fn category_options(selected: &str) -> Vec<&str> {
    let mut options = SUGGESTED_CATEGORIES.to_vec();

    if !selected.is_empty() && !options.contains(&selected) {
        options.push(selected);
    }

    options
}

fn expense_form(values: &FormValues, is_editing: bool) -> Markup {
    let amount_str = values.amount.map(|amount| format!("{amount:.2}"));
    let submit_text = if is_editing {
        "Update Expense"
    } else {
        "Add Expense"
    };

    html! {
        form
            hx-post=(endpoints::SUBMIT_EXPENSE)
            hx-target-error="#alert-container"
            hx-indicator="#indicator"
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description *" }

                input
                    name="description"
                    id="description"
                    type="text"
                    placeholder="What did you spend on?"
                    value=(values.description)
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount ($) *" }

                div class="input-wrapper w-full"
                {
                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="0.01"
                        min="0.01"
                        placeholder="0.00"
                        value=[amount_str.as_deref()]
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                select
                    name="category"
                    id="category"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for category in category_options(&values.category) {
                        option value=(category) selected[category == values.category] { (category) }
                    }
                }
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date *" }

                input
                    name="date"
                    id="date"
                    type="date"
                    value=(values.date)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" id="indicator" class=(BUTTON_PRIMARY_STYLE)
            {
                span class="htmx-indicator" { (loading_spinner()) }
                (submit_text)
            }
        }
    }
}

fn form_page_view(session: &Session, values: &FormValues, alerts: Vec<Alert>) -> Markup {
    let is_editing = session.editing().is_some();
    let heading = if is_editing {
        "Edit Expense"
    } else {
        "Add New Expense"
    };
    let nav_bar = NavBar::new(endpoints::ADD_EXPENSE_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            @for alert in alerts {
                (alert.into_markup())
            }

            h2 class="text-2xl font-bold mb-6" { (heading) }

            (expense_form(values, is_editing))

            @if is_editing {
                button
                    type="button"
                    hx-post=(endpoints::CANCEL_EDIT)
                    hx-target-error="#alert-container"
                    class={"mt-4 " (BUTTON_SECONDARY_STYLE)}
                {
                    "Cancel Edit"
                }
            }
        }
    };

    base(heading, &[dollar_input_styles()], &content)
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use scraper::Selector;

    use crate::{
        dashboard::{DashboardState, form_page::get_add_expense_page},
        endpoints,
        test_utils::{
            assert_form_input, assert_form_input_with_value, assert_form_select_with_value,
            assert_form_submit_button_with_text, assert_hx_endpoint, assert_status_ok,
            assert_valid_html, must_get_form, must_get_text, parse_html_document, spawn_api,
            unreachable_api,
        },
    };

    use super::category_options;

    #[tokio::test]
    async fn renders_add_form() {
        let state = DashboardState::new(spawn_api(true).await, "Etc/UTC");

        let response = get_add_expense_page(State(state)).await;

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::SUBMIT_EXPENSE, "hx-post");
        assert_form_input(&form, "description", "text");
        assert_form_input(&form, "amount", "number");
        assert_form_input(&form, "date", "date");
        assert_form_submit_button_with_text(&form, "Add Expense");
        assert_form_select_with_value(&form, "category", "Food");
        assert!(
            html.select(&Selector::parse("button[hx-post='/edit/cancel']").unwrap())
                .next()
                .is_none(),
            "add form should not have a cancel edit button"
        );
    }

    #[tokio::test]
    async fn renders_edit_form_with_current_values() {
        let state = DashboardState::new(spawn_api(true).await, "Etc/UTC");
        let expenses = state.api.list_expenses().await.unwrap();
        let gas = expenses.iter().find(|e| e.description == "Gas").unwrap();
        state
            .with_session(|session| {
                session.refresh(expenses.clone());
                session.start_edit(gas.id)
            })
            .unwrap()
            .unwrap();

        let response = get_add_expense_page(State(state)).await;

        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_form_input_with_value(&form, "description", "text", "Gas");
        assert_form_input_with_value(&form, "amount", "number", "45.75");
        assert_form_input_with_value(&form, "date", "date", "2024-01-13");
        assert_form_submit_button_with_text(&form, "Update Expense");
        assert_form_select_with_value(&form, "category", "Transportation");
        assert_eq!(must_get_text(&html, "h2"), "Edit Expense");
        assert!(
            html.select(&Selector::parse("button[hx-post='/edit/cancel']").unwrap())
                .next()
                .is_some(),
            "edit form should have a cancel edit button"
        );
    }

    #[tokio::test]
    async fn unreachable_api_shows_alert_and_form() {
        let state = DashboardState::new(unreachable_api().await, "Etc/UTC");

        let response = get_add_expense_page(State(state)).await;

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        let alert_text = must_get_text(&html, "div[role='alert']");
        assert!(alert_text.contains("Could not connect to the server"));
        must_get_form(&html);
    }

    #[test]
    fn keeps_unsuggested_category() {
        assert_eq!(category_options("Travel").last(), Some(&"Travel"));
        assert_eq!(category_options("Bills").len(), 6);
    }
}
