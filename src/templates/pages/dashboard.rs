use crate::domain::dashboard::{DashboardData, MetricsRange};
use crate::templates::components::segmented;
use crate::templates::{desktop_layout, NavItem};
use maud::{html, Markup};

pub fn dashboard_page(data: &DashboardData, range: MetricsRange) -> Markup {
    let ranges: Vec<(&str, String, bool)> = MetricsRange::ALL
        .into_iter()
        .map(|r| (r.label(), format!("/?range={}", r.as_str()), r == range))
        .collect();

    desktop_layout(
        "Дашборд",
        NavItem::Dashboard,
        html! {
            section class="dashboard-section" aria-labelledby="recommendations-title" {
                h2 id="recommendations-title" { "Рекомендации ИИ" }
                div class="recommendations-grid" {
                    @for rec in &data.recommendations {
                        article class="recommendation-card" id=(rec.id) {
                            img src=(rec.image) alt="" aria-hidden="true";
                            div class="recommendation-body" {
                                h3 { (rec.title) }
                                p { (rec.description) }
                                a class="button" href=(rec.action_href) { (rec.action_label) }
                            }
                        }
                    }
                }
            }

            section class="dashboard-section" aria-labelledby="metrics-title" {
                div class="section-header" {
                    h2 id="metrics-title" { "Ключевые показатели" }
                    (segmented("Период", &ranges))
                }
                div class="metrics-grid" data-range=(range.as_str()) {
                    @for metric in &data.metrics {
                        div class="metric-card" id=(metric.id) {
                            span class="metric-label" { (metric.label) }
                            span class="metric-value" { (metric.value) }
                            span class=(format!("metric-trend {}", metric.trend.css_class())) {
                                (metric.trend.arrow()) " " (metric.trend_label)
                            }
                        }
                    }
                }
            }

            section class="dashboard-section charts-grid" {
                @for chart in &data.charts {
                    div class="chart-card" id=(chart.id) {
                        h3 { (chart.title) }
                        div class="chart-placeholder" { "График появится здесь" }
                    }
                }
            }
        },
    )
}
