pub mod state;

use self::state::{create_state, status_totals};
use crate::shared::components::status_badge::classified_badge;
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use contracts::domain::a003_alert::{dispatch_inventory, Alert};
use contracts::enums::AlertStatus;
use contracts::shared::classify::Classify;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AlertsPage() -> impl IntoView {
    let state = create_state();
    let selected_tab = RwSignal::new("alerts".to_string());

    let visible = Memo::new(move |_| state.with(|s| s.visible_alerts()));
    let selected = Memo::new(move |_| state.with(|s| s.selected()));
    let query = move || state.with(|s| s.query.clone());

    view! {
        <div class="page">
            <PageHeader
                title="Alerts & Dispatch"
                subtitle="Outbreak alerts, community responses and relief dispatch"
                route="/alerts"
            >
                <div class="search-box">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Search alerts..."
                        prop:value=query
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
                    {AlertStatus::all().into_iter().map(|st| view! {
                        <option value=st.code()>{st.display_name()}</option>
                    }).collect_view()}
                </select>
            </PageHeader>

            <div class="stat-grid">
                {status_totals().into_iter().map(|(status, n)| view! {
                    <StatCard
                        label=format!("{} Alerts", status.display_name())
                        icon_name="bell"
                        value=n.to_string()
                        category=status.category()
                    />
                }).collect_view()}
            </div>

            <TabList selected_value=selected_tab>
                <Tab value="alerts">"Active Alerts"</Tab>
                <Tab value="inventory">"Dispatch Inventory"</Tab>
            </TabList>

            <div class="alerts-layout">
                <div class="alerts-main">
                    {move || if selected_tab.get() == "inventory" {
                        view! { <InventoryTable /> }.into_any()
                    } else {
                        view! {
                            <For
                                each=move || visible.get()
                                key=|alert| alert.id.clone()
                                children=move |alert| {
                                    let id = alert.id.clone();
                                    let id_for_class = id.clone();
                                    let q = query();
                                    view! {
                                        <div
                                            class="alert-card"
                                            class:alert-card--selected=move || state.with(|s| s.selected_alert.as_deref() == Some(id_for_class.as_str()))
                                            on:click=move |_| {
                                                let id = id.clone();
                                                log::debug!("alert selected: {}", id);
                                                state.update(|s| s.selected_alert = Some(id));
                                            }
                                        >
                                            <div class="alert-card__head">
                                                <div>
                                                    <div class="alert-card__title">{highlight_matches(&alert.category, &q)}</div>
                                                    <div class="text-muted">
                                                        {icon("map-pin")}" "{highlight_matches(&alert.village, &q)}
                                                    </div>
                                                </div>
                                                <div class="alert-card__badges">
                                                    {classified_badge(&alert.severity, alert.severity.code())}
                                                    {classified_badge(&alert.status, alert.status.display_name())}
                                                </div>
                                            </div>
                                            <p>{highlight_matches(&alert.description, &q)}</p>
                                            <div class="alert-card__meta text-muted">
                                                <span>{icon("clock")}" "{alert.timestamp.clone()}</span>
                                                <span>{icon("users")}{format!(" {} affected", alert.affected_population)}</span>
                                                <span>{icon("send")}" "{alert.responses_label()}</span>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                            <Show when=move || visible.with(|v| v.is_empty())>
                                <p class="text-muted">"No alerts match the current filters"</p>
                            </Show>
                        }.into_any()
                    }}
                </div>

                <div class="card alert-detail">
                    {move || match selected.get() {
                        Some(alert) => alert_detail(alert).into_any(),
                        None => view! {
                            <p class="text-muted">"Select an alert to view response details"</p>
                        }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn InventoryTable() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h3>{icon("package")}" Relief Inventory"</h3>
            </div>
            <table class="table__data">
                <thead>
                    <tr>
                        <th class="table__header-cell">"Item"</th>
                        <th class="table__header-cell">"Available"</th>
                        <th class="table__header-cell">"Reserved"</th>
                        <th class="table__header-cell">"Free Stock"</th>
                    </tr>
                </thead>
                <tbody>
                    {dispatch_inventory().iter().map(|item| view! {
                        <tr class="table__row">
                            <td class="table__cell">{item.item.clone()}</td>
                            <td class="table__cell">{format!("{} {}", item.available, item.unit)}</td>
                            <td class="table__cell" class:text-warning=item.is_reserved()>
                                {format!("{} {}", item.reserved, item.unit)}
                            </td>
                            <td class="table__cell">{format!("{} {}", item.free_stock(), item.unit)}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

fn alert_detail(alert: Alert) -> impl IntoView {
    view! {
        <div class="card__header">
            <h3>{alert.id.clone()}</h3>
            {classified_badge(&alert.severity, alert.severity.code())}
        </div>
        <div class="card__body">
            <div class="stat-row"><span>"Village"</span><span>{alert.village.clone()}</span></div>
            <div class="stat-row">
                <span>"Population"</span>
                <span>{alert.affected_population.to_string()}</span>
            </div>
            <div class="stat-row">
                <span>"Coordinates"</span>
                <span>{format!("{:.4}, {:.4}", alert.coordinates.lat, alert.coordinates.lng)}</span>
            </div>

            <h4>"Community Response"</h4>
            {alert.responses.iter().map(|response| view! {
                <div class="response-row">
                    <div class="response-row__head">
                        {classified_badge(&response.counters.channel(), response.counters.channel().code())}
                        <span class="text-muted">{response.language.clone()}</span>
                    </div>
                    <div>{response.counters.summary()}</div>
                </div>
            }).collect_view()}

            <h4>{format!("Dispatch Orders ({} units)", alert.total_dispatched_quantity())}</h4>
            {if alert.dispatch_orders.is_empty() {
                view! { <p class="text-muted">"No dispatch orders"</p> }.into_any()
            } else {
                alert.dispatch_orders.iter().map(|order| view! {
                    <div class="stat-row">
                        <span>{format!("{} × {}", order.item, order.quantity)}</span>
                        {classified_badge(&order.status, order.status.code())}
                    </div>
                }).collect_view().into_any()
            }}
        </div>
    }
}
