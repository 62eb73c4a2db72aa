use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionContext;
use crate::system::settings::context::SettingsContext;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Sidebar visibility for the dashboard shell.
    provide_context(AppGlobalContext::new());

    // In-memory session opened by the login page.
    provide_context(SessionContext::new());

    // Thresholds and alert settings edited on the admin page.
    provide_context(SettingsContext::load());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
