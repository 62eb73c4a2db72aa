use super::state::AdminState;
use crate::shared::components::status_badge::classified_badge;
use contracts::shared::filter::{filter_entities, FilterCriteria, StatusFilter};
use contracts::system::audit::{audit_log, AuditCategory};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AuditTab(state: RwSignal<AdminState>) -> impl IntoView {
    let category = RwSignal::new(state.with_untracked(|s| s.audit_category.clone()));

    Effect::new(move |_| {
        let code = category.get();
        state.update(|s| s.audit_category = code);
    });

    let entries = Memo::new(move |_| {
        let criteria = FilterCriteria::new(
            String::new(),
            StatusFilter::parse(&category.get(), AuditCategory::from_code),
        );
        filter_entities(audit_log(), &criteria)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    view! {
        <div class="card">
            <div class="card__header">
                <h3>"Audit Logs"</h3>
                <Select value=category>
                    <option value="all">"All Actions"</option>
                    {AuditCategory::all().into_iter().map(|c| view! {
                        <option value=c.code()>{c.filter_label()}</option>
                    }).collect_view()}
                </Select>
            </div>
            <div class="card__body audit-list">
                <For
                    each=move || entries.get()
                    key=|entry| entry.id
                    children=move |entry| view! {
                        <div class="audit-entry">
                            <div class="audit-entry__head">
                                <span class="audit-entry__action">{entry.action.clone()}</span>
                                {classified_badge(&entry.severity, entry.severity.code())}
                            </div>
                            <div class="audit-entry__details">{entry.details.clone()}</div>
                            <div class="text-muted">
                                {format!("{} • {}", entry.user, entry.timestamp_label())}
                            </div>
                        </div>
                    }
                />
            </div>
        </div>
    }
}
