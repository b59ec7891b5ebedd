//! Chart generation and rendering for the analytics page.
//!
//! This module creates interactive ECharts visualizations for the spending totals:
//! - **Category Chart**: Share of spending per category as a pie chart
//! - **Monthly Chart**: Total spending per month as a bar chart
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::{Pie, bar},
};
use maud::{Markup, PreEscaped, html};

use crate::{CategoryTotal, MonthlyTotal, html::HeadElement};

/// Where the ECharts library is loaded from.
pub(super) const ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// An analytics chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML container for a chart.
pub(super) fn chart_view(chart: &DashboardChart) -> Markup {
    html!(
        div
            id=(chart.id)
            class="min-h-[380px] rounded dark:bg-gray-100"
        {}
    )
}

/// The script that draws each chart once the page has loaded.
///
/// Charts follow the browser's colour scheme and resize with the window.
/// Every `<` in the chart options is written as `\u003c` so that user text
/// such as a category name cannot close the `<script>` element.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let entries = charts
        .iter()
        .map(|chart| {
            format!(
                "[\"{}\", {}]",
                chart.id,
                chart.options.replace('<', "\\u003c")
            )
        })
        .collect::<Vec<_>>()
        .join(",\n");

    let script = format!(
        r#"document.addEventListener("DOMContentLoaded", () => {{
    const darkMode = window.matchMedia("(prefers-color-scheme: dark)");
    const draw = (element, option) => {{
        const chart = echarts.init(element, darkMode.matches ? "dark" : null);
        chart.setOption(option);
        return chart;
    }};

    for (const [id, option] of [{entries}]) {{
        const element = document.getElementById(id);
        if (!element) continue;

        let chart = draw(element, option);
        window.addEventListener("resize", () => chart.resize());
        darkMode.addEventListener("change", () => {{
            chart.dispose();
            chart = draw(element, option);
        }});
    }}
}});"#
    );

    HeadElement::ScriptSource(PreEscaped(script))
}

/// The share of spending per category.
pub(super) fn category_chart(totals: &[CategoryTotal]) -> Chart {
    let data: Vec<(f64, &str)> = totals
        .iter()
        .map(|total| (total.total, total.category.as_str()))
        .collect();

    Chart::new()
        .title(Title::new().text("Spending by Category"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().bottom("1%"))
        .series(
            Pie::new()
                .name("Category")
                .radius(vec!["35%", "65%"])
                .data(data),
        )
}

/// The total spent per month.
pub(super) fn monthly_chart(totals: &[MonthlyTotal]) -> Chart {
    let labels: Vec<String> = totals.iter().map(|total| total.month.clone()).collect();
    let values: Vec<f64> = totals.iter().map(|total| total.total).collect();

    Chart::new()
        .title(Title::new().text("Monthly Trends"))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).name("Month").data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Total Amount")
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(bar::Bar::new().name("Total Amount").data(values))
}

/// Formats chart values as dollars, e.g. "$1,234.50".
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "return Number.isFinite(number) \
            ? number.toLocaleString('en-US', { style: 'currency', currency: 'USD' }) \
            : '-';",
    )
}

/// An axis tooltip that shows dollar values.
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
