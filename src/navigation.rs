//! The dashboard's page tabs.

use maud::{Markup, html};

use crate::endpoints;

/// The pages reachable from the navigation bar, in display order.
const PAGES: [(&str, &str, &str); 3] = [
    (endpoints::ADD_EXPENSE_VIEW, "Add Expense", "➕"),
    (endpoints::EXPENSES_VIEW, "View Expenses", "📋"),
    (endpoints::ANALYTICS_VIEW, "Analytics", "📊"),
];

const TAB_STYLE: &str = "inline-flex items-center gap-2 px-4 py-2 rounded-t-lg border-b-2 \
    border-transparent text-gray-500 hover:text-gray-700 hover:border-gray-300 \
    dark:text-gray-400 dark:hover:text-gray-200";

const CURRENT_TAB_STYLE: &str = "inline-flex items-center gap-2 px-4 py-2 rounded-t-lg border-b-2 \
    border-blue-600 text-blue-600 font-semibold dark:border-blue-400 dark:text-blue-400";

/// One tab in the navigation bar.
#[derive(Debug, Clone, Copy)]
struct Tab {
    url: &'static str,
    title: &'static str,
    icon: &'static str,
    is_current: bool,
}

impl Tab {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            CURRENT_TAB_STYLE
        } else {
            TAB_STYLE
        };

        html! {
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                span aria-hidden="true" { (self.icon) }
                span class="hidden sm:inline" { (self.title) }
            }
        }
    }
}

/// The header shown at the top of every dashboard page.
pub struct NavBar {
    tabs: [Tab; 3],
}

impl NavBar {
    /// Build the navigation bar with the tab for `active_endpoint` highlighted.
    ///
    /// No tab is highlighted if `active_endpoint` is not one of the pages.
    pub fn new(active_endpoint: &str) -> Self {
        Self {
            tabs: PAGES.map(|(url, title, icon)| Tab {
                url,
                title,
                icon,
                is_current: url == active_endpoint,
            }),
        }
    }

    pub fn into_html(self) -> Markup {
        html! {
            header class="w-full bg-white shadow-sm dark:bg-gray-900"
            {
                div class="max-w-screen-xl mx-auto px-4 pt-4 flex flex-wrap items-end justify-between gap-2"
                {
                    a
                        href=(endpoints::ROOT)
                        class="pb-3 text-2xl font-semibold whitespace-nowrap text-gray-900 dark:text-white"
                    {
                        "💰 Expense Tracker"
                    }

                    nav aria-label="Pages"
                    {
                        ul class="flex text-sm font-medium text-center"
                        {
                            @for tab in self.tabs {
                                li class="me-1" { (tab.into_html()) }
                            }
                        }
                    }
                }
            }
        }
    }
}
