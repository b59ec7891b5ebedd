//! Shared page layout, styles and formatting helpers for the dashboard.

use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use numfmt::{Formatter, Precision};

pub const LINK_STYLE: &str = "font-medium text-blue-600 hover:underline dark:text-blue-400";

pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2.5 rounded-lg font-medium \
    text-white bg-blue-600 hover:enabled:bg-blue-700 disabled:bg-blue-400 \
    dark:bg-blue-500 dark:hover:enabled:bg-blue-600";

pub const BUTTON_SECONDARY_STYLE: &str = "w-full px-4 py-2.5 rounded-lg font-medium \
    text-gray-800 bg-white border border-gray-300 hover:bg-gray-100 \
    dark:text-gray-200 dark:bg-gray-800 dark:border-gray-600 dark:hover:bg-gray-700";

pub const BUTTON_DELETE_STYLE: &str = "px-3 py-1 rounded-md text-sm font-medium \
    text-red-700 bg-red-50 hover:bg-red-100 dark:text-red-300 dark:bg-red-900/30 \
    cursor-pointer";

pub const BUTTON_EDIT_STYLE: &str = "px-3 py-1 rounded-md text-sm font-medium \
    text-blue-700 bg-blue-50 hover:bg-blue-100 dark:text-blue-300 dark:bg-blue-900/30 \
    cursor-pointer";

pub const FORM_CONTAINER_STYLE: &str =
    "w-full max-w-md mx-auto px-6 py-8 text-gray-900 dark:text-white";
pub const FORM_LABEL_STYLE: &str = "block mb-1 text-sm font-medium text-gray-700 dark:text-gray-200";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded-lg text-sm \
    text-gray-900 bg-white border border-gray-300 focus:ring-blue-500 \
    focus:border-blue-500 dark:text-white dark:bg-gray-700 dark:border-gray-600";

pub const TABLE_HEADER_STYLE: &str = "text-xs uppercase text-gray-600 bg-gray-100 \
    dark:text-gray-300 dark:bg-gray-700";
pub const TABLE_ROW_STYLE: &str = "border-b border-gray-200 bg-white \
    dark:border-gray-700 dark:bg-gray-800";
pub const TABLE_CELL_STYLE: &str = "px-4 py-3";

pub const CATEGORY_BADGE_STYLE: &str = "inline-block px-2.5 py-0.5 rounded-full \
    text-xs font-semibold text-emerald-800 bg-emerald-100 \
    dark:text-emerald-200 dark:bg-emerald-900";

pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center w-full mx-auto px-6 py-8 text-gray-900 dark:text-white";

pub const CARD_STYLE: &str = "flex-1 min-w-40 p-4 rounded-lg bg-white shadow-sm \
    border border-gray-200 dark:bg-gray-800 dark:border-gray-700";

const HTMX_URL: &str = "https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js";
const HTMX_RESPONSE_TARGETS_URL: &str =
    "https://unpkg.com/htmx-ext-response-targets@2.0.4/dist/response-targets.min.js";
const TAILWIND_URL: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

/// Extra elements for a page's `<head>`.
pub enum HeadElement {
    /// The URL of a JavaScript file.
    ScriptLink(String),
    /// Inline JavaScript.
    ScriptSource(PreEscaped<String>),
    /// Inline CSS.
    Style(PreEscaped<String>),
}

/// Wrap `content` in a full HTML document with the dashboard's scripts.
///
/// The body always contains an empty `#alert-container`, the target for
/// error alerts returned to htmx requests.
pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Expense Tracker" }

                script src=(TAILWIND_URL) {}
                script src=(HTMX_URL) {}
                script src=(HTMX_RESPONSE_TARGETS_URL) {}

                style
                {
                    ".htmx-indicator { display: none; } \
                    .htmx-request .htmx-indicator, .htmx-request.htmx-indicator { display: inline-block; }"
                }

                @for element in head_elements {
                    @match element {
                        HeadElement::ScriptLink(url) => { script src=(url) {} }
                        HeadElement::ScriptSource(source) => { script { (source) } }
                        HeadElement::Style(css) => { style { (css) } }
                    }
                }
            }

            body
                hx-ext="response-targets"
                class="min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)

                div
                    id="alert-container"
                    class="fixed bottom-4 left-1/2 -translate-x-1/2 z-50 w-full max-w-md px-4"
                {}
            }
        }
    }
}

/// A full page for an HTTP error, e.g. a 404.
pub fn error_view(title: &str, status: &str, description: &str, fix: &str) -> Markup {
    let content = html! {
        main class="flex flex-col items-center justify-center min-h-screen px-6 text-center"
        {
            p class="text-8xl font-extrabold text-blue-600 dark:text-blue-400" { (status) }
            h1 class="mt-4 text-3xl font-bold text-gray-900 dark:text-white" { (description) }
            p class="mt-2 text-lg text-gray-600 dark:text-gray-300" { (fix) }

            a
                href="/"
                class={"mt-6 inline-block px-5 py-2.5 rounded-lg text-white bg-blue-600 hover:bg-blue-700"}
            {
                "Back to the dashboard"
            }
        }
    };

    base(title, &[], &content)
}

/// A small spinning ring that is shown while an htmx request is in flight.
pub fn loading_spinner() -> Markup {
    html! {
        span
            role="status"
            aria-label="Saving"
            class="inline-block w-4 h-4 me-2 align-[-2px] rounded-full border-2 \
                border-white border-t-transparent animate-spin"
        {}
    }
}

/// Returns the CSS styles for adding a dollar sign prefix to number inputs.
pub fn dollar_input_styles() -> HeadElement {
    HeadElement::Style(PreEscaped(
        ".input-wrapper { position: relative; display: block; } \
        .input-wrapper input[type=\"number\"] { padding-left: 1.4rem; } \
        .input-wrapper::before { content: '$'; position: absolute; left: 0.6rem; \
        top: 50%; transform: translateY(-50%); pointer-events: none; }"
            .to_owned(),
    ))
}

/// Format `amount` as dollars and cents with thousands separators, e.g. "$1,085.50".
///
/// Amounts are rounded to the nearest cent. Negative amounts are prefixed with "-".
pub fn format_currency(amount: f64) -> String {
    static DOLLAR_FMT: OnceLock<Option<Formatter>> = OnceLock::new();
    let dollar_fmt = DOLLAR_FMT.get_or_init(|| {
        Formatter::currency("$")
            .ok()
            .map(|fmt| fmt.precision(Precision::Decimals(0)))
    });

    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    let dollars = cents / 100;

    // numfmt formats zero as a bare "0". Cents are appended unformatted.
    let dollars = match dollar_fmt {
        Some(fmt) if dollars > 0 => fmt.fmt_string(dollars as f64),
        _ => format!("${dollars}"),
    };

    format!("{sign}{dollars}.{:02}", cents % 100)
}

/// A link styled for use inside a paragraph.
pub fn link(url: &str, text: &str) -> Markup {
    html! {
        a href=(url) class=(LINK_STYLE) { (text) }
    }
}
