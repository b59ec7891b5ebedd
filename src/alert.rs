//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered as HTML fragments. Dashboard forms point
//! `hx-target-error` at `#alert-container` so htmx swaps error alerts into
//! the page, and full pages can render an alert inline with [Alert::into_markup].

use axum::response::Html;
use maud::{Markup, html};

/// Alert messages with their styling.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// Something went well.
    Success {
        /// The headline.
        message: String,
        /// Optional extra text shown under the headline.
        details: String,
    },
    /// Something went wrong.
    Error {
        /// The headline.
        message: String,
        /// Optional extra text shown under the headline.
        details: String,
    },
}

impl Alert {
    pub fn into_markup(self) -> Markup {
        let (container_style, message, details) = match self {
            Alert::Success { message, details } => (
                "p-4 mb-4 text-sm text-green-800 rounded-lg bg-green-50 \
                dark:bg-gray-800 dark:text-green-400",
                message,
                details,
            ),
            Alert::Error { message, details } => (
                "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
                dark:bg-gray-800 dark:text-red-400",
                message,
                details,
            ),
        };

        html! {
            div class=(container_style) role="alert"
            {
                span class="font-medium" { (message) }

                @if !details.is_empty() {
                    p { (details) }
                }
            }
        }
    }

    pub fn into_html(self) -> Html<String> {
        Html(self.into_markup().into_string())
    }
}
