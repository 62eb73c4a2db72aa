use crate::shared::components::status_badge::classified_badge;
use contracts::system::languages::supported_languages;
use leptos::prelude::*;

#[component]
pub fn LanguagesTab() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h3>"Supported Languages"</h3>
                <p class="text-muted">"Alert templates and voice prompts per language"</p>
            </div>
            <div class="card__body language-list">
                {supported_languages().iter().map(|lang| view! {
                    <div class="language-row">
                        <div>
                            <div class="language-row__name">{lang.name.clone()}</div>
                            <div class="text-muted">
                                {format!("{} • {} messages", lang.code.to_uppercase(), lang.messages)}
                            </div>
                        </div>
                        <div class="language-row__badges">
                            {classified_badge(&lang.status, lang.status.code())}
                            <span class="badge badge--muted">{lang.audio_label()}</span>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
