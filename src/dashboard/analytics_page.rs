//! The page with spending charts and summary statistics.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    CategoryTotal, MonthlyTotal,
    alert::Alert,
    dashboard::{
        DashboardState,
        charts::{
            DashboardChart, ECHARTS_URL, category_chart, chart_view, charts_script, monthly_chart,
        },
        session::Session,
        summary::{summarize, summary_statistics_view},
    },
    endpoints,
    html::{HeadElement, PAGE_CONTAINER_STYLE, base},
    internal_server_error::InternalServerError,
    navigation::NavBar,
};

const CATEGORY_CHART_ID: &str = "category-chart";
const MONTHLY_CHART_ID: &str = "monthly-chart";

/// Display the category and monthly charts and the summary statistics.
pub async fn get_analytics_page(State(state): State<DashboardState>) -> Response {
    let (category_totals, monthly_totals) =
        tokio::join!(state.api.category_totals(), state.api.monthly_totals());

    let (session, mut alerts) = match state.refreshed_session().await {
        Ok(snapshot) => snapshot,
        Err(error) => {
            tracing::error!("could not render the analytics page: {error}");
            return InternalServerError::rendering("analytics").into_response();
        }
    };

    // A failed fetch is shown once even if both analytics requests failed.
    let category_totals = category_totals.unwrap_or_else(|error| {
        push_unique(&mut alerts, error.into_alert());
        Vec::new()
    });
    let monthly_totals = monthly_totals.unwrap_or_else(|error| {
        push_unique(&mut alerts, error.into_alert());
        Vec::new()
    });

    analytics_page_view(&session, &category_totals, &monthly_totals, alerts).into_response()
}

fn push_unique(alerts: &mut Vec<Alert>, alert: Alert) {
    if !alerts.contains(&alert) {
        alerts.push(alert);
    }
}

fn chart_panel(heading: &str, chart: Option<&DashboardChart>, empty_message: &str) -> Markup {
    html! {
        div class="w-full"
        {
            h3 class="text-xl font-semibold mb-4" { (heading) }

            @match chart {
                Some(chart) => { (chart_view(chart)) }
                None => { p class="no-chart-data" { (empty_message) } }
            }
        }
    }
}

fn analytics_page_view(
    session: &Session,
    category_totals: &[CategoryTotal],
    monthly_totals: &[MonthlyTotal],
    alerts: Vec<Alert>,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::ANALYTICS_VIEW).into_html();

    let category = (!category_totals.is_empty()).then(|| DashboardChart {
        id: CATEGORY_CHART_ID,
        options: category_chart(category_totals).to_string(),
    });
    let monthly = (!monthly_totals.is_empty()).then(|| DashboardChart {
        id: MONTHLY_CHART_ID,
        options: monthly_chart(monthly_totals).to_string(),
    });
    let charts: Vec<DashboardChart> = category.into_iter().chain(monthly).collect();
    let has_data = !charts.is_empty();
    let stats = summarize(session.expenses());

    let content = html! {
        (nav_bar)

        div class={(PAGE_CONTAINER_STYLE) " max-w-screen-xl"}
        {
            @for alert in alerts {
                (alert.into_markup())
            }

            h2 class="text-2xl font-bold mb-6 self-start" { "Spending Analytics" }

            @if has_data {
                section id="charts" class="w-full mx-auto mb-4"
                {
                    div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
                    {
                        (chart_panel(
                            "Spending by Category",
                            charts.iter().find(|chart| chart.id == CATEGORY_CHART_ID),
                            "No category data available",
                        ))
                        (chart_panel(
                            "Monthly Trends",
                            charts.iter().find(|chart| chart.id == MONTHLY_CHART_ID),
                            "No monthly data available",
                        ))
                    }
                }

                @if let Some(stats) = &stats {
                    (summary_statistics_view(stats))
                }
            } @else {
                p id="no-analytics" { "No data available for analytics" }
            }
        }
    };

    let head_elements = if has_data {
        vec![
            HeadElement::ScriptLink(ECHARTS_URL.to_owned()),
            charts_script(&charts),
        ]
    } else {
        Vec::new()
    };

    base("Analytics", &head_elements, &content)
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        ExpenseInput,
        dashboard::{DashboardState, analytics_page::get_analytics_page},
        test_utils::{
            assert_status_ok, assert_valid_html, must_get_text, parse_html_document, spawn_api,
            unreachable_api,
        },
    };

    #[track_caller]
    fn assert_chart_exists(html: &Html, chart_id: &str) {
        let selector = Selector::parse(&format!("div#{chart_id}")).unwrap();

        assert!(
            html.select(&selector).next().is_some(),
            "want chart container #{chart_id}"
        );
    }

    fn stat(html: &Html, label: &str) -> String {
        let selector = Selector::parse(&format!("p[data-stat='{label}']")).unwrap();

        html.select(&selector)
            .next()
            .unwrap_or_else(|| panic!("No statistic {label}"))
            .text()
            .collect()
    }

    #[tokio::test]
    async fn renders_charts_and_statistics() {
        let state = DashboardState::new(spawn_api(true).await, "Etc/UTC");

        let response = get_analytics_page(State(state)).await;

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_chart_exists(&html, "category-chart");
        assert_chart_exists(&html, "monthly-chart");
        assert_eq!(stat(&html, "Total Expenses"), "$176.74");
        assert_eq!(stat(&html, "Most Expensive"), "$85.50");
    }

    #[tokio::test]
    async fn empty_database_shows_no_data_message() {
        let state = DashboardState::new(spawn_api(false).await, "Etc/UTC");

        let response = get_analytics_page(State(state)).await;

        let html = parse_html_document(response).await;
        assert_eq!(
            must_get_text(&html, "#no-analytics"),
            "No data available for analytics"
        );
        assert!(
            html.select(&Selector::parse("#charts").unwrap())
                .next()
                .is_none()
        );
    }

    #[tokio::test]
    async fn unreachable_api_shows_single_alert() {
        let state = DashboardState::new(unreachable_api().await, "Etc/UTC");

        let response = get_analytics_page(State(state)).await;

        let html = parse_html_document(response).await;
        assert_eq!(
            html.select(&Selector::parse("div[role='alert']").unwrap())
                .count(),
            1
        );
        assert!(
            html.select(&Selector::parse("#no-analytics").unwrap())
                .next()
                .is_some()
        );
    }

    #[tokio::test]
    async fn category_names_cannot_inject_script() {
        let state = DashboardState::new(spawn_api(false).await, "Etc/UTC");
        state
            .api
            .create_expense(&ExpenseInput::new(
                "Hack",
                5.0,
                "</script><script>alert(1)</script>",
                date!(2024 - 01 - 01),
            ))
            .await
            .expect("Could not create expense");

        let response = get_analytics_page(State(state)).await;

        assert_status_ok(&response);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not get response body");
        let body = std::str::from_utf8(&body).expect("Response body is not UTF-8");
        assert!(
            !body.contains("<script>alert(1)</script>"),
            "category was rendered as markup"
        );
        assert!(body.contains("\\u003c/script>\\u003cscript>alert(1)"));
    }
}
