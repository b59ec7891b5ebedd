//! The page listing every expense with actions to edit or delete each one.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Expense,
    alert::Alert,
    dashboard::{DashboardState, session::Session},
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, BUTTON_EDIT_STYLE, CARD_STYLE, CATEGORY_BADGE_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
        format_currency, link,
    },
    internal_server_error::InternalServerError,
    navigation::NavBar,
};

/// Display every expense, most recent first, with the running total.
pub async fn get_expenses_page(State(state): State<DashboardState>) -> Response {
    match state.refreshed_session().await {
        Ok((session, alerts)) => expenses_page_view(&session, alerts).into_response(),
        Err(error) => {
            tracing::error!("could not render the expenses page: {error}");
            InternalServerError::rendering("expenses").into_response()
        }
    }
}

fn expense_row(expense: &Expense) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_EXPENSE, expense.id);
    let delete_url = format_endpoint(endpoints::DELETE_EXPENSE, expense.id);

    html! {
        tr class=(TABLE_ROW_STYLE) data-expense-id=(expense.id)
        {
            th scope="row" class={(TABLE_CELL_STYLE) " font-medium text-gray-900 dark:text-white"}
            {
                (expense.description)
            }
            td class={(TABLE_CELL_STYLE) " whitespace-nowrap"} { (format_currency(expense.amount)) }
            td class=(TABLE_CELL_STYLE)
            {
                span class=(CATEGORY_BADGE_STYLE) { (expense.category) }
            }
            td class={(TABLE_CELL_STYLE) " whitespace-nowrap"} { (expense.date) }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    button
                        type="button"
                        hx-post=(edit_url)
                        hx-target-error="#alert-container"
                        class=(BUTTON_EDIT_STYLE)
                    {
                        "Edit"
                    }

                    button
                        type="button"
                        hx-delete=(delete_url)
                        hx-confirm={"Delete \"" (expense.description) "\"?"}
                        hx-target-error="#alert-container"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Delete"
                    }
                }
            }
        }
    }
}

fn expenses_table(session: &Session) -> Markup {
    html! {
        div class=(CARD_STYLE) id="running-total"
        {
            p class="text-sm text-gray-500 dark:text-gray-400" { "Total Expenses" }
            p class="text-2xl font-bold" { (format_currency(session.running_total())) }
        }

        div class="w-full mt-4 overflow-x-auto rounded-lg shadow"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                    }
                }

                tbody
                {
                    @for expense in session.expenses() {
                        (expense_row(expense))
                    }
                }
            }
        }
    }
}

fn expenses_page_view(session: &Session, alerts: Vec<Alert>) -> Markup {
    let nav_bar = NavBar::new(endpoints::EXPENSES_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class={(PAGE_CONTAINER_STYLE) " max-w-screen-xl"}
        {
            @for alert in alerts {
                (alert.into_markup())
            }

            h2 class="text-2xl font-bold mb-6 self-start" { "Your Expenses" }

            @if session.expenses().is_empty() {
                p id="no-expenses"
                {
                    "No expenses found. "
                    (link(endpoints::ADD_EXPENSE_VIEW, "Add your first expense!"))
                }
            } @else {
                (expenses_table(session))
            }
        }
    };

    base("Expenses", &[], &content)
}
