mod chatbot;
mod report_form;
pub mod state;

use self::chatbot::ChatbotAnalytics;
use self::report_form::ReportForm;
use self::state::{create_state, CommunityState};
use crate::domain::a005_volunteer_task::ui::list::TasksList;
use crate::shared::components::status_badge::{classified_badge, text_class};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use contracts::domain::a004_community_report::{community_reports, source_counts, CommunityReport};
use contracts::enums::ReportStatus;
use contracts::shared::classify::Classify;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CommunityPage() -> impl IntoView {
    let state = create_state();
    let selected_tab = RwSignal::new("reports".to_string());

    view! {
        <div class="page">
            <PageHeader
                title="Community Engagement"
                subtitle="Field reports, volunteer tasks and chatbot activity"
                route="/volunteers"
            >
                <span class="badge badge--success">{icon("users")}" Volunteers Active"</span>
            </PageHeader>

            <div class="community-layout">
                <div class="community-main">
                    <TabList selected_value=selected_tab>
                        <Tab value="reports">"Community Reports"</Tab>
                        <Tab value="tasks">"Volunteer Tasks"</Tab>
                        <Tab value="chatbot">"Chatbot Analytics"</Tab>
                    </TabList>
                    <div class="tab-content">
                        {move || match selected_tab.get().as_str() {
                            "tasks" => view! { <TasksList /> }.into_any(),
                            "chatbot" => view! { <ChatbotAnalytics /> }.into_any(),
                            _ => view! { <ReportsList state=state /> }.into_any(),
                        }}
                    </div>
                </div>

                <div class="community-side">
                    <ReportDetails state=state />
                    <div class="card">
                        <div class="card__header"><h3>"Report Sources"</h3></div>
                        <div class="card__body">
                            {source_counts(community_reports()).into_iter().map(|(channel, n)| view! {
                                <div class="stat-row">
                                    <span>{channel.stats_label()}</span>
                                    <span class=text_class(channel.category())>{n}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                    <ReportForm state=state />
                </div>
            </div>
        </div>
    }
}

#[component]
fn ReportsList(state: RwSignal<CommunityState>) -> impl IntoView {
    let visible = Memo::new(move |_| state.with(|s| s.visible_reports()));
    let query = move || state.with(|s| s.query.clone());

    view! {
        <div class="list-toolbar">
            <div class="search-box">
                {icon("search")}
                <input
                    type="text"
                    placeholder="Search reports..."
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
                {ReportStatus::all().into_iter().map(|st| view! {
                    <option value=st.code()>{st.display_name()}</option>
                }).collect_view()}
            </select>
        </div>

        <For
            each=move || visible.get()
            key=|report| report.id.clone()
            children=move |report| {
                let id = report.id.clone();
                let id_for_class = id.clone();
                let q = query();
                view! {
                    <div
                        class="report-card"
                        class:report-card--selected=move || state.with(|s| s.selected_report.as_deref() == Some(id_for_class.as_str()))
                        on:click=move |_| {
                            let id = id.clone();
                            state.update(|s| s.selected_report = Some(id));
                        }
                    >
                        <div class="report-card__head">
                            <div>
                                <div class="report-card__title">{highlight_matches(&report.location, &q)}</div>
                                <div class="text-muted">
                                    {highlight_matches(&report.id, &q)}" • "{highlight_matches(&report.volunteer, &q)}
                                </div>
                            </div>
                            <div class="report-card__badges">
                                {classified_badge(&report.source, report.source.code())}
                                {classified_badge(&report.severity, report.severity.code())}
                                {classified_badge(&report.status, report.status.display_name())}
                            </div>
                        </div>
                        <p>{highlight_matches(&report.symptoms, &q)}</p>
                        <div class="text-muted">{icon("clock")}" "{report.timestamp.clone()}</div>
                    </div>
                }
            }
        />
        <Show when=move || visible.with(|v| v.is_empty())>
            <p class="text-muted">"No reports match the current filters"</p>
        </Show>
    }
}

#[component]
fn ReportDetails(state: RwSignal<CommunityState>) -> impl IntoView {
    let selected = Memo::new(move |_| state.with(|s| s.selected()));

    view! {
        <div class="card">
            <div class="card__header"><h3>"Report Details"</h3></div>
            <div class="card__body">
                {move || match selected.get() {
                    Some(report) => report_details(report).into_any(),
                    None => view! {
                        <p class="text-muted">"Select a report to view details"</p>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

fn report_details(report: CommunityReport) -> impl IntoView {
    view! {
        <div class="stat-row"><span>"Report ID"</span><span>{report.id.clone()}</span></div>
        <div class="stat-row"><span>"Location"</span><span>{report.location.clone()}</span></div>
        <div class="stat-row"><span>"Volunteer"</span><span>{report.volunteer.clone()}</span></div>
        <div class="stat-row"><span>"Contact"</span><span>{report.contact.clone()}</span></div>
        <div class="stat-row">
            <span>"Status"</span>
            {classified_badge(&report.status, report.status.display_name())}
        </div>
        <h4>"Symptoms"</h4>
        <p>{report.symptoms.clone()}</p>
        <h4>"Follow-up"</h4>
        <p>{report.follow_up.clone()}</p>
    }
}
