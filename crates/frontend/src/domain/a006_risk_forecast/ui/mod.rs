pub mod state;

use self::state::{create_state, parse_slider};
use crate::shared::components::status_badge::{classified_badge, text_class};
use crate::shared::components::{PageHeader, ProgressBar};
use crate::shared::icons::icon;
use crate::system::settings::context::use_settings;
use contracts::domain::a006_risk_forecast::{
    feature_importance, forecast_days, model_info, SliderRange, WhatIfScenario, RAINFALL_RANGE,
    TEMPERATURE_RANGE, TURBIDITY_RANGE,
};
use contracts::shared::classify::Classify;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn RiskForecastPage() -> impl IntoView {
    let scenario = create_state();
    let settings = use_settings();
    let navigate = use_navigate();
    let model = model_info();

    let risk_threshold = move || settings.config.with(|c| c.alerts.risk_threshold);
    let outcome = move || scenario.with(|s| s.simulated_outcome());

    view! {
        <div class="page">
            <PageHeader
                title="Risk Forecast"
                subtitle="AI-powered outbreak prediction for the next 7 days"
                route="/risk-forecast"
            >
                <span class="badge badge--primary">{icon("activity")}" "{model.name.clone()}</span>
                <span class="badge badge--muted">{model.updated.clone()}</span>
            </PageHeader>

            <div class="forecast-layout">
                <div class="card">
                    <div class="card__header"><h3>"7-Day Risk Forecast"</h3></div>
                    <div class="card__body">
                        {forecast_days().iter().map(|day| {
                            let confidence = f64::from(day.confidence);
                            view! {
                                <div class="forecast-day">
                                    <div class="forecast-day__head">
                                        <div>
                                            <div class="forecast-day__name">{day.day.clone()}</div>
                                            <div class="text-muted">{day.date.clone()}</div>
                                        </div>
                                        {classified_badge(&day.risk, format!("{} Risk", day.risk.display_name()))}
                                        <span class=text_class(day.trend.category())>{day.trend.arrow()}</span>
                                    </div>
                                    <div class="forecast-day__confidence">
                                        <span class="text-muted">"Confidence"</span>
                                        <ProgressBar percent=Signal::derive(move || confidence) category=day.risk.category() />
                                        <span>{format!("{}%", day.confidence)}</span>
                                    </div>
                                    <div class="text-muted">{day.factors_label()}</div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>

                <div class="forecast-side">
                    <div class="card">
                        <div class="card__header"><h3>"Feature Importance"</h3></div>
                        <div class="card__body">
                            {feature_importance().iter().map(|f| {
                                let importance = f64::from(f.importance);
                                view! {
                                    <div class="feature-row">
                                        <div class="stat-row">
                                            <span>{f.feature.clone()}</span>
                                            <span>{format!("{}%", f.importance)}</span>
                                        </div>
                                        <ProgressBar percent=Signal::derive(move || importance) category=f.category />
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__header"><h3>"What-If Analysis"</h3></div>
                        <div class="card__body">
                            {slider(
                                "Turbidity",
                                "NTU",
                                TURBIDITY_RANGE,
                                scenario,
                                |s| s.turbidity,
                                WhatIfScenario::set_turbidity,
                            )}
                            {slider(
                                "Rainfall",
                                "mm",
                                RAINFALL_RANGE,
                                scenario,
                                |s| s.rainfall,
                                WhatIfScenario::set_rainfall,
                            )}
                            {slider(
                                "Temperature",
                                "°C",
                                TEMPERATURE_RANGE,
                                scenario,
                                |s| s.temperature,
                                WhatIfScenario::set_temperature,
                            )}
                            <div class="what-if__result">
                                <div class="text-muted">"Simulated Risk"</div>
                                <div class=move || text_class(outcome().level.category())>
                                    {move || outcome().headline()}
                                </div>
                                <div class="text-muted">
                                    {move || format!("Confidence: {}%", outcome().confidence)}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="stat-grid">
                <div class="card">
                    <div class="card__header"><h3>"Model Accuracy"</h3></div>
                    <div class="card__body">
                        <div class="stat-card__value">{model.accuracy_label()}</div>
                        <div class="text-muted">"Based on historical validation"</div>
                    </div>
                </div>
                <div class="card">
                    <div class="card__header"><h3>"Data Sources"</h3></div>
                    <div class="card__body">
                        {model.data_sources.iter().map(|source| view! {
                            <div class="stat-row">
                                <span>{source.name.clone()}</span>
                                <span class="badge badge--success">{source.status.clone()}</span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
                <div class="card">
                    <div class="card__header"><h3>"Alert Threshold"</h3></div>
                    <div class="card__body">
                        <div class="stat-card__value">{move || format!("{}%", risk_threshold())}</div>
                        <div class="text-muted">"Risk level that triggers alerts"</div>
                        <button
                            class="button button--secondary"
                            on:click=move |_| navigate("/admin", Default::default())
                        >
                            {icon("settings")}" Adjust Settings"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn slider(
    label: &'static str,
    unit: &'static str,
    range: SliderRange,
    scenario: RwSignal<WhatIfScenario>,
    get: fn(&WhatIfScenario) -> f64,
    set: fn(&mut WhatIfScenario, f64),
) -> impl IntoView {
    view! {
        <div class="slider">
            <div class="stat-row">
                <span>{label}</span>
                <span>{move || format!("{} {}", scenario.with(get), unit)}</span>
            </div>
            <input
                type="range"
                min=range.min.to_string()
                max=range.max.to_string()
                step="1"
                prop:value=move || scenario.with(get).to_string()
                on:input=move |ev| {
                    if let Some(value) = parse_slider(&event_target_value(&ev)) {
                        scenario.update(|s| set(s, value));
                    }
                }
            />
        </div>
    }
}
