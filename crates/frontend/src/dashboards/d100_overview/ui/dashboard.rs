use crate::shared::components::status_badge::{classified_badge, text_class};
use crate::shared::components::{PageHeader, ProgressBar, StatCard};
use crate::shared::icons::icon;
use contracts::dashboards::d100_overview::{kpi_cards, overview_forecast, quick_actions, recent_alerts};
use contracts::shared::classify::Classify;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

const KPI_ICONS: [&str; 4] = ["droplet", "alert-triangle", "bell", "wifi"];

/// Landing page after login: headline figures, short forecast and latest alerts
#[component]
pub fn OverviewPage() -> impl IntoView {
    let navigate = use_navigate();
    let go = move |path: &'static str| {
        let navigate = navigate.clone();
        move |_: leptos::ev::MouseEvent| {
            leptos::logging::log!("overview: navigate to {}", path);
            navigate(path, Default::default());
        }
    };

    view! {
        <div class="page">
            <PageHeader
                title="Dashboard Overview"
                subtitle="Real-time water quality monitoring across Northeast India"
                route="/overview"
            >
                <span class="badge badge--muted">{icon("clock")}" Last Updated: 2 min ago"</span>
            </PageHeader>

            <div class="stat-grid">
                {kpi_cards().iter().zip(KPI_ICONS).map(|(kpi, icon_name)| view! {
                    <StatCard
                        label=kpi.title.clone()
                        icon_name=icon_name
                        value=kpi.value.clone()
                        category=kpi.category
                        subtitle=kpi.change.clone()
                    />
                }).collect_view()}
            </div>

            <div class="overview-grid">
                <div class="card">
                    <div class="card__header">
                        <h3>{icon("trending-up")}" 5-Day Risk Forecast"</h3>
                        <button class="button button--ghost" on:click=go("/risk-forecast")>
                            "View Details"
                        </button>
                    </div>
                    <div class="card__body">
                        {overview_forecast().iter().map(|day| {
                            let confidence = f64::from(day.confidence);
                            view! {
                                <div class="forecast-row">
                                    <div class="forecast-row__day">
                                        <div>{day.day.clone()}</div>
                                        <div class="text-muted">{day.date.clone()}</div>
                                    </div>
                                    {classified_badge(&day.risk, day.risk.display_name())}
                                    <div class="forecast-row__confidence">
                                        <ProgressBar percent=Signal::derive(move || confidence) category=day.risk.category() />
                                        <span class="text-muted">{format!("{}%", day.confidence)}</span>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>

                <div class="card">
                    <div class="card__header">
                        <h3>{icon("bell")}" Recent Alerts"</h3>
                        <button class="button button--ghost" on:click=go("/alerts")>
                            "View All"
                        </button>
                    </div>
                    <div class="card__body">
                        {recent_alerts().iter().map(|alert| view! {
                            <div class="alert-row">
                                <span class=text_class(alert.severity.category())>{icon("alert-triangle")}</span>
                                <div class="alert-row__text">
                                    <div class="alert-row__village">{alert.village.clone()}</div>
                                    <div class="text-muted">{alert.category.clone()}</div>
                                </div>
                                <div class="alert-row__meta">
                                    {classified_badge(&alert.severity, alert.severity.code())}
                                    <span class="text-muted">{alert.time.clone()}</span>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>

            <div class="card">
                <div class="card__header"><h3>"Quick Actions"</h3></div>
                <div class="card__body quick-actions">
                    {quick_actions().iter().map(|action| view! {
                        <button class="button button--secondary" on:click=go(action.path)>
                            {action.label}
                        </button>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
