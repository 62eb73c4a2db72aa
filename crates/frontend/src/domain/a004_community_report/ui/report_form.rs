use super::state::CommunityState;
use contracts::enums::Severity;
use leptos::prelude::*;

/// Quick field report form. Submitting only logs the report.
#[component]
pub fn ReportForm(state: RwSignal<CommunityState>) -> impl IntoView {
    let can_submit = move || state.with(|s| s.draft.is_complete());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut taken = None;
        state.update(|s| taken = s.take_draft());
        if let Some(draft) = taken {
            log::info!(
                "community report submitted: location={}, severity={:?}, symptoms={}",
                draft.location.trim(),
                draft.severity,
                draft.symptoms.trim()
            );
        }
    };

    view! {
        <div class="card">
            <div class="card__header"><h3>"Quick Report"</h3></div>
            <form class="card__body" on:submit=on_submit>
                <div class="form__group">
                    <label class="form__label">"Location"</label>
                    <input
                        type="text"
                        placeholder="Village / ward"
                        prop:value=move || state.with(|s| s.draft.location.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.draft.location = value);
                        }
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Symptoms"</label>
                    <textarea
                        rows="3"
                        placeholder="Describe the symptoms observed"
                        prop:value=move || state.with(|s| s.draft.symptoms.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.draft.symptoms = value);
                        }
                    ></textarea>
                </div>
                <div class="form__group">
                    <label class="form__label">"Severity"</label>
                    <select
                        prop:value=move || state.with(|s| s.draft.severity.map(|v| v.code()).unwrap_or_default().to_string())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.set_draft_severity(&value));
                        }
                    >
                        <option value="">"Select severity"</option>
                        {Severity::all().into_iter().map(|v| view! {
                            <option value=v.code()>{v.display_name()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <button type="submit" class="button button--primary" disabled=move || !can_submit()>
                    "Submit Report"
                </button>
                <Show when=move || state.with(|s| s.submitted > 0)>
                    <p class="text-muted">
                        {move || format!("{} report(s) sent this session", state.with(|s| s.submitted))}
                    </p>
                </Show>
            </form>
        </div>
    }
}
