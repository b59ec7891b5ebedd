//! Summary statistics computed over the dashboard's expense mirror.

use maud::{Markup, html};

use crate::{
    Expense,
    html::{CARD_STYLE, format_currency},
};

/// Totals derived from a list of expenses.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct SummaryStatistics {
    /// The sum of all amounts.
    pub total: f64,
    /// The mean amount per expense.
    pub average: f64,
    /// The single largest amount.
    pub largest: f64,
}

/// Calculate the summary statistics for `expenses`.
///
/// Returns `None` if `expenses` is empty.
pub(super) fn summarize(expenses: &[Expense]) -> Option<SummaryStatistics> {
    if expenses.is_empty() {
        return None;
    }

    let total: f64 = expenses.iter().map(|expense| expense.amount).sum();
    let largest = expenses
        .iter()
        .map(|expense| expense.amount)
        .fold(f64::MIN, f64::max);

    Some(SummaryStatistics {
        total,
        average: total / expenses.len() as f64,
        largest,
    })
}

fn stat_card(label: &str, value: f64) -> Markup {
    html! {
        div class=(CARD_STYLE)
        {
            p class="text-sm text-gray-500 dark:text-gray-400" { (label) }
            p class="text-2xl font-bold" data-stat=(label) { (format_currency(value)) }
        }
    }
}

/// Renders the total, average and largest expense as a row of cards.
pub(super) fn summary_statistics_view(stats: &SummaryStatistics) -> Markup {
    html! {
        section id="summary-statistics" class="w-full mt-8"
        {
            h3 class="text-xl font-semibold mb-4" { "Summary Statistics" }

            div class="flex flex-wrap gap-4"
            {
                (stat_card("Total Expenses", stats.total))
                (stat_card("Average per Expense", stats.average))
                (stat_card("Most Expensive", stats.largest))
            }
        }
    }
}
