pub mod state;

use self::state::{create_state, shown_label, status_counts};
use crate::shared::components::status_badge::{badge_class, classified_badge, text_class};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use contracts::domain::a001_monitored_site::{monitored_sites, MonitoredSite, WEATHER_NOW};
use contracts::enums::SiteStatus;
use contracts::shared::classify::Classify;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn MapPage() -> impl IntoView {
    let state = create_state();
    let show_weather = RwSignal::new(false);

    let visible = Memo::new(move |_| state.with(|s| s.visible_sites()));
    let selected = Memo::new(move |_| state.with(|s| s.selected()));

    view! {
        <div class="page">
            <PageHeader
                title="Water Source Map"
                subtitle="Geographic view of monitored water sources"
                route="/map"
            >
                <select
                    class="select"
                    prop:value=move || state.with(|s| s.status_filter.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        log::debug!("map status filter: {}", value);
                        state.update(|s| s.status_filter = value);
                    }
                >
                    <option value="all">"All Sources"</option>
                    {SiteStatus::all().into_iter().map(|st| view! {
                        <option value=st.code()>{st.filter_label()}</option>
                    }).collect_view()}
                </select>
                <Switch checked=show_weather label="Weather Overlay" />
            </PageHeader>

            <div class="map-layout">
                <div class="card map-card">
                    <div class="map-canvas">
                        <Show when=move || show_weather.get()>
                            <div class="map-weather">
                                <div>{icon("cloud-rain")}{format!(" Rainfall: {}mm", WEATHER_NOW.rainfall_mm)}</div>
                                <div>{icon("thermometer")}{format!(" Temp: {}°C", WEATHER_NOW.temperature_c)}</div>
                            </div>
                        </Show>

                        <For
                            each=move || visible.get().into_iter().enumerate()
                            key=|(i, site)| (*i, site.id)
                            children=move |(i, site)| {
                                let (left, top) = MonitoredSite::marker_position(i);
                                let id = site.id;
                                let class = format!("map-marker {}", badge_class(site.status.category()));
                                view! {
                                    <button
                                        class=class
                                        class:map-marker--selected=move || state.with(|s| s.selected_site == Some(id))
                                        style=format!("left: {}%; top: {}%;", left, top)
                                        title=site.name.clone()
                                        on:click=move |_| state.update(|s| s.selected_site = Some(id))
                                    >
                                        {icon("map-pin")}
                                    </button>
                                }
                            }
                        />

                        <div class="map-counter">
                            {move || shown_label(visible.with(|v| v.len()), monitored_sites().len())}
                        </div>
                    </div>

                    <div class="map-legend">
                        {SiteStatus::all().into_iter().map(|st| view! {
                            <span class="map-legend__item">
                                <span class=format!("legend-dot {}", badge_class(st.category()))></span>
                                {st.display_name()}
                            </span>
                        }).collect_view()}
                    </div>
                </div>

                <div class="map-side">
                    <div class="card">
                        <div class="card__header"><h3>"Site Details"</h3></div>
                        <div class="card__body">
                            {move || match selected.get() {
                                Some(site) => site_details(site).into_any(),
                                None => view! {
                                    <p class="text-muted">"Click a marker to view site details"</p>
                                }.into_any(),
                            }}
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__header"><h3>"Quick Stats"</h3></div>
                        <div class="card__body">
                            {status_counts().into_iter().map(|(st, n)| view! {
                                <div class="stat-row">
                                    <span>{st.filter_label()}</span>
                                    <span class=text_class(st.category())>{n}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn site_details(site: MonitoredSite) -> impl IntoView {
    let m = site.measurements;
    view! {
        <div class="site-details">
            <h4>{site.name.clone()}</h4>
            <div class=badge_class(site.status.category())>{site.status_banner()}</div>
            <div class="site-details__grid">
                <div>"pH"</div><div>{m.ph}</div>
                <div>"TDS"</div><div>{format!("{} ppm", m.tds)}</div>
                <div>"Turbidity"</div><div>{format!("{} NTU", m.turbidity)}</div>
                <div>"Temperature"</div><div>{format!("{}°C", m.temperature)}</div>
                <div>"Bacteria"</div>
                <div class=move || if m.bacterial_detected { "text-danger" } else { "text-success" }>
                    {m.bacterial_label()}
                </div>
            </div>
            <div class="site-details__risk">
                <span>"Risk Level: "</span>
                {classified_badge(&site.risk, site.risk.display_name())}
                <p class="text-muted">{site.risk.advice()}</p>
            </div>
            <div class="text-muted">{format!("Last reading: {}", site.last_reading)}</div>
        </div>
    }
}
