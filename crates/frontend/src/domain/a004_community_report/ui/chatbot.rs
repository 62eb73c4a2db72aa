use crate::shared::components::status_badge::text_class;
use crate::shared::components::ProgressBar;
use contracts::domain::a004_community_report::{chatbot_intents, intent_share, top_questions};
use leptos::prelude::*;

#[component]
pub fn ChatbotAnalytics() -> impl IntoView {
    let intents = chatbot_intents();

    view! {
        <div class="community-grid">
            <div class="card">
                <div class="card__header"><h3>"Conversation Intents"</h3></div>
                <div class="card__body">
                    {intents.iter().map(|intent| {
                        let share = f64::from(intent_share(intent, intents));
                        view! {
                            <div class="intent-row">
                                <div class="stat-row">
                                    <span>{intent.intent.clone()}</span>
                                    <span class=text_class(intent.trend.engagement_category())>
                                        {format!("{} {}", intent.count, intent.trend.arrow())}
                                    </span>
                                </div>
                                <ProgressBar percent=Signal::derive(move || share) />
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
            <div class="card">
                <div class="card__header"><h3>"Top Questions"</h3></div>
                <div class="card__body">
                    {top_questions().iter().enumerate().map(|(i, q)| view! {
                        <div class="stat-row">
                            <span>{format!("{}. {}", i + 1, q.question)}</span>
                            <span class="badge badge--muted">{q.count.to_string()}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
