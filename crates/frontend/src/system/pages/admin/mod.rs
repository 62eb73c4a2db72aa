mod audit;
mod integrations;
mod languages;
pub mod state;
mod thresholds;
mod users;

use self::state::{create_state, AdminTab};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AdminPage() -> impl IntoView {
    let state = create_state();
    let selected_tab = RwSignal::new(AdminTab::Thresholds.code().to_string());

    let active_tab =
        move || AdminTab::from_code(&selected_tab.get()).unwrap_or(AdminTab::Thresholds);

    view! {
        <div class="page">
            <PageHeader
                title="Admin Settings"
                subtitle="Configure thresholds, users, languages and integrations"
                route="/admin"
            >
                <span class="badge badge--primary">{icon("shield")}" Administrator"</span>
            </PageHeader>

            <TabList selected_value=selected_tab>
                {AdminTab::all().into_iter().map(|tab| view! {
                    <Tab value=tab.code()>{tab.label()}</Tab>
                }).collect_view()}
            </TabList>

            <div class="tab-content">
                {move || match active_tab() {
                    AdminTab::Thresholds => view! { <thresholds::ThresholdsTab state=state /> }.into_any(),
                    AdminTab::Users => view! { <users::UsersTab state=state /> }.into_any(),
                    AdminTab::Languages => view! { <languages::LanguagesTab /> }.into_any(),
                    AdminTab::Integrations => view! { <integrations::IntegrationsTab /> }.into_any(),
                    AdminTab::Audit => view! { <audit::AuditTab state=state /> }.into_any(),
                }}
            </div>
        </div>
    }
}
