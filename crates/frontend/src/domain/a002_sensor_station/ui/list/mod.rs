pub mod chart;
pub mod state;

use self::chart::{axis_ticks, line_path, threshold_lines, ChartScale, CHART_HEIGHT, CHART_WIDTH};
use self::state::create_state;
use crate::shared::components::status_badge::{classified_badge, text_class};
use crate::shared::components::{PageHeader, ProgressBar, StatCard};
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use contracts::domain::a002_sensor_station::{
    count_anomalies, generate_series, health_summary, sensor_stations, snapshot_time, SensorStation,
};
use contracts::enums::{Parameter, SensorStatus};
use contracts::shared::classify::{battery_category, Classify, DisplayCategory};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SensorsPage() -> impl IntoView {
    let state = create_state();
    let selected_tab = RwSignal::new("time-series".to_string());

    let visible = Memo::new(move |_| state.with(|s| s.visible_stations()));
    let (healthy, warning, critical) = health_summary(sensor_stations());

    view! {
        <div class="page">
            <PageHeader
                title="Sensor Monitoring"
                subtitle="IoT water quality sensors across the region"
                route="/sensors"
            >
                <div class="search-box">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Search stations..."
                        prop:value=move || state.with(|s| s.query.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.query = value);
                        }
                    />
                </div>
                <select
                    class="select"
                    prop:value=move || state.with(|s| s.status_filter.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.status_filter = value);
                    }
                >
                    <option value="all">"All Status"</option>
                    {SensorStatus::all().into_iter().map(|st| view! {
                        <option value=st.code()>{st.display_name()}</option>
                    }).collect_view()}
                </select>
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Healthy" icon_name="check-circle" value=healthy.to_string() category=DisplayCategory::Success />
                <StatCard label="Warning" icon_name="alert-triangle" value=warning.to_string() category=DisplayCategory::Warning />
                <StatCard label="Critical" icon_name="alert-triangle" value=critical.to_string() category=DisplayCategory::Danger />
                {move || view! {
                    <StatCard
                        label="Stations Shown"
                        icon_name="activity"
                        value=visible.with(|v| v.len()).to_string()
                        category=DisplayCategory::Primary
                    />
                }}
            </div>

            <TabList selected_value=selected_tab>
                <Tab value="time-series">"Time Series"</Tab>
                <Tab value="live">"Live Parameters"</Tab>
                <Tab value="network">"Sensor Network"</Tab>
            </TabList>

            <div class="tab-content">
                {move || match selected_tab.get().as_str() {
                    "live" => view! { <LiveParameters stations=visible /> }.into_any(),
                    "network" => view! { <SensorNetwork state=state stations=visible /> }.into_any(),
                    _ => view! { <TimeSeriesChart state=state /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn TimeSeriesChart(state: RwSignal<state::SensorsState>) -> impl IntoView {
    let series = generate_series(snapshot_time());
    let series = StoredValue::new(series);

    let chart = Memo::new(move |_| {
        let parameters = state.with(|s| s.plotted_parameters());
        let single = state.with(|s| s.single_parameter());
        series.with_value(|series| {
            let scale = ChartScale::fit(series, &parameters);
            let lines: Vec<(Parameter, String)> = parameters
                .iter()
                .map(|p| (*p, line_path(series, *p, &scale)))
                .collect();
            let band = single.map(|p| threshold_lines(p, &scale));
            let anomalies = single.map(|p| count_anomalies(series, p));
            (lines, band, anomalies, axis_ticks(series, &scale))
        })
    });

    let view_box = format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT);

    view! {
        <div class="card">
            <div class="card__header">
                <h3>{icon("activity")}" Last 24 Hours"</h3>
                <select
                    class="select"
                    prop:value=move || state.with(|s| s.parameter.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.parameter = value);
                    }
                >
                    <option value="all">"All Parameters"</option>
                    {Parameter::all().into_iter().map(|p| view! {
                        <option value=p.code()>{p.display_name()}</option>
                    }).collect_view()}
                </select>
            </div>
            <div class="card__body">
                <svg class="chart" viewBox=view_box preserveAspectRatio="none">
                    {move || chart.with(|(_, band, _, _)| band.map(|(y_min, y_max)| view! {
                        <line class="chart__threshold" x1="0" x2=CHART_WIDTH.to_string() y1=format!("{:.1}", y_min) y2=format!("{:.1}", y_min) />
                        <line class="chart__threshold" x1="0" x2=CHART_WIDTH.to_string() y1=format!("{:.1}", y_max) y2=format!("{:.1}", y_max) />
                    }))}
                    {move || chart.with(|(lines, _, _, _)| lines.iter().map(|(p, d)| view! {
                        <path d=d.clone() fill="none" stroke=p.chart_color() stroke-width="2" />
                    }).collect_view())}
                    {move || chart.with(|(_, _, _, ticks)| ticks.iter().map(|(x, label)| view! {
                        <text class="chart__tick" x=format!("{:.1}", x) y=(CHART_HEIGHT - 8.0).to_string() text-anchor="middle">{label.clone()}</text>
                    }).collect_view())}
                </svg>
                <div class="chart__legend">
                    {move || state.with(|s| s.plotted_parameters()).into_iter().map(|p| view! {
                        <span class="chart__legend-item">
                            <span class="legend-dot" style=format!("background: {};", p.chart_color())></span>
                            {p.display_name()}
                        </span>
                    }).collect_view()}
                </div>
                {move || chart.with(|(_, _, anomalies, _)| *anomalies).map(|n| view! {
                    <p class="text-muted">{format!("{} samples outside the safe range", n)}</p>
                })}
            </div>
        </div>
    }
}

#[component]
fn LiveParameters(stations: Memo<Vec<SensorStation>>) -> impl IntoView {
    view! {
        <For
            each=move || stations.get()
            key=|station| station.id.clone()
            children=move |station| view! {
                <div class="card">
                    <div class="card__header">
                        <h3>{station.name.clone()}</h3>
                        {classified_badge(&station.status, station.status.display_name())}
                    </div>
                    <div class="card__body parameter-grid">
                        {station.readings.iter().map(|(parameter, reading)| {
                            let compliance = f64::from(reading.compliance);
                            view! {
                                <div class="parameter-card">
                                    <div class="parameter-card__head">
                                        <span>{parameter.display_name()}</span>
                                        {classified_badge(&reading.status, reading.status.display_name())}
                                    </div>
                                    <div class=format!("parameter-card__value {}", text_class(reading.status.category()))>
                                        {format!("{} {}", reading.value, reading.unit)}
                                    </div>
                                    <div class="text-muted">{format!("Safe range: {}", reading.safe_range)}</div>
                                    <ProgressBar percent=Signal::derive(move || compliance) category=reading.status.category() />
                                    <div class="text-muted">{format!("{}% compliance", reading.compliance)}</div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>
            }
        />
    }
}

#[component]
fn SensorNetwork(
    state: RwSignal<state::SensorsState>,
    stations: Memo<Vec<SensorStation>>,
) -> impl IntoView {
    let selected = Memo::new(move |_| state.with(|s| s.selected()));
    let query = move || state.with(|s| s.query.clone());

    view! {
        <div class="network-layout">
            <div class="station-grid">
                <For
                    each=move || stations.get()
                    key=|station| station.id.clone()
                    children=move |station| {
                        let id = station.id.clone();
                        let id_for_class = id.clone();
                        let q = query();
                        view! {
                            <div
                                class="station-card"
                                class:station-card--selected=move || state.with(|s| s.selected_station.as_deref() == Some(id_for_class.as_str()))
                                on:click=move |_| {
                                    let id = id.clone();
                                    state.update(|s| s.selected_station = Some(id));
                                }
                            >
                                <div class="station-card__head">
                                    <div>
                                        <div class="station-card__name">{highlight_matches(&station.name, &q)}</div>
                                        <div class="text-muted">
                                            {highlight_matches(&station.id, &q)}" • "{highlight_matches(&station.location, &q)}
                                        </div>
                                    </div>
                                    {classified_badge(&station.status, station.status.display_name())}
                                </div>
                                <div class="station-card__indicators">
                                    <span class=text_class(battery_category(station.battery))>
                                        {icon("battery")}{format!(" {}%", station.battery)}
                                    </span>
                                    <span class=text_class(station.signal.category())>
                                        {if station.signal.is_connected() { icon("wifi") } else { icon("wifi-off") }}
                                        {format!(" {}", station.signal.code())}
                                    </span>
                                    <span class=if station.calibration_due { "text-warning" } else { "text-success" }>
                                        {format!("Calibration: {}", station.calibration_label())}
                                    </span>
                                </div>
                                <div class="text-muted">{format!("Last reading: {}", station.last_reading)}</div>
                            </div>
                        }
                    }
                />
                <Show when=move || stations.with(|s| s.is_empty())>
                    <p class="text-muted">"No stations match the current filters"</p>
                </Show>
            </div>

            <div class="card station-detail">
                {move || match selected.get() {
                    Some(station) => station_detail(station).into_any(),
                    None => view! {
                        <p class="text-muted">"Select a station to view its details"</p>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

fn station_detail(station: SensorStation) -> impl IntoView {
    let hw = station.hardware;
    let solar = f64::from(hw.solar);
    let battery = f64::from(hw.battery);
    view! {
        <div class="card__header">
            <h3>{station.name.clone()}</h3>
            {classified_badge(&station.overall_health(), station.overall_health().display_name())}
        </div>
        <div class="card__body">
            <h4>"Current Readings"</h4>
            {station.readings.iter().map(|(parameter, reading)| view! {
                <div class="stat-row">
                    <span>{parameter.display_name()}</span>
                    <span class=text_class(reading.status.category())>
                        {format!("{} {}", reading.value, reading.unit)}
                    </span>
                </div>
            }).collect_view()}

            <h4>"Hardware Health"</h4>
            <div class="stat-row"><span>{icon("sun")}" Solar Panel"</span><span>{format!("{}%", hw.solar)}</span></div>
            <ProgressBar percent=Signal::derive(move || solar) category=battery_category(hw.solar) />
            <div class="stat-row"><span>{icon("battery")}" Battery"</span><span>{format!("{}%", hw.battery)}</span></div>
            <ProgressBar percent=Signal::derive(move || battery) category=battery_category(hw.battery) />
            <div class="stat-row">
                <span>"LoRa Connection"</span>
                {classified_badge(&hw.lora, hw.lora.code())}
            </div>
            <div class="stat-row">
                <span>"GPS Module"</span>
                {classified_badge(&hw.gps, hw.gps.code())}
            </div>
        </div>
    }
}
