//! Dashboard Page Component
//!
//! Counters, a revenue chart, an orders chart and the activity feed.

use dioxus::prelude::*;

use crate::hooks::use_admin_page;
use crate::state::{APP_STATE, Page};
use champa_catalog::{DashboardView, Series};

#[component]
pub fn DashboardPage() -> Element {
    use_admin_page(Page::Dashboard);

    let (stats, error) = {
        let state = APP_STATE.read();
        (state.dashboard.clone(), state.dashboard_error.clone())
    };

    if let Some(message) = error {
        return rsx! {
            div {
                class: "page admin-page",
                h1 { class: "page-title", "Dashboard" }
                div { class: "error-row", "{message}" }
            }
        };
    }

    let Some(stats) = stats else {
        return rsx! {
            div {
                class: "page admin-page",
                h1 { class: "page-title", "Dashboard" }
                div { class: "loading-row", "Loading..." }
            }
        };
    };

    let view = DashboardView::from_stats(&stats, chrono::Utc::now());

    rsx! {
        div {
            class: "page admin-page dashboard-page",
            h1 { class: "page-title", "Dashboard" }

            div {
                class: "stat-grid",
                StatCard { label: "Users", value: view.total_users.to_string(), icon: "👥" }
                StatCard { label: "Products", value: view.total_products.to_string(), icon: "👕" }
                StatCard { label: "Orders", value: view.total_orders.to_string(), icon: "🧾" }
                StatCard { label: "Revenue", value: view.revenue.clone(), icon: "💰" }
            }

            div {
                class: "chart-grid",
                BarChart { title: "Revenue by month", series: view.revenue_series.clone() }
                BarChart { title: "Orders by day", series: view.orders_series.clone() }
            }

            div {
                class: "card activity-card",
                h2 { class: "section-title", "Recent activity" }
                if view.activities.is_empty() {
                    p { class: "muted", "No activity yet" }
                }
                for (i, line) in view.activities.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "activity-row",
                        span {
                            class: "avatar",
                            style: "background-color: {line.color};",
                            "{line.initial}"
                        }
                        span { class: "activity-text", "{line.text}" }
                        span { class: "activity-when muted", "{line.when}" }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String, icon: &'static str) -> Element {
    rsx! {
        div {
            class: "card stat-card",
            span { class: "stat-icon", "{icon}" }
            div {
                span { class: "stat-label", "{label}" }
                span { class: "stat-value", "{value}" }
            }
        }
    }
}

/// Percentage height of each bar
pub fn bar_heights(series: &Series) -> Vec<f64> {
    series
        .values
        .iter()
        .map(|v| (series.fraction(*v) * 100.0).round())
        .collect()
}

#[component]
fn BarChart(title: &'static str, series: Series) -> Element {
    let heights = bar_heights(&series);
    let axis_max = series.axis_max;

    rsx! {
        div {
            class: "card chart-card",
            div {
                class: "chart-head",
                h2 { class: "section-title", "{title}" }
                span { class: "muted", "max {axis_max}" }
            }
            div {
                class: "bar-chart",
                for (i, (label, height)) in series.labels.iter().zip(heights).enumerate() {
                    div {
                        key: "{i}",
                        class: "bar-column",
                        div { class: "bar", style: "height: {height}%;" }
                        span { class: "bar-label", "{label}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_heights_are_percentages() {
        let series = Series {
            labels: vec!["a".into(), "b".into()],
            values: vec![500.0, 2000.0],
            axis_max: 2000.0,
            step: 500.0,
        };
        assert_eq!(bar_heights(&series), vec![25.0, 100.0]);
    }
}
