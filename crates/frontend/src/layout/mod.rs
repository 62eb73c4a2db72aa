pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use left::Sidebar;
use top_header::TopHeader;

/// Shell shared by every dashboard page.
///
/// ```text
/// +-----------+------------------------------+
/// |           |  TopHeader (narrow screens)  |
/// |  Sidebar  +------------------------------+
/// |           |           Content            |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let ctx = global_context::use_global_context();

    view! {
        <div class="app-layout">
            <Sidebar />
            // backdrop closes the sidebar sheet
            <div
                class="app-backdrop"
                class:app-backdrop--visible=move || ctx.left_open.get()
                on:click=move |_| ctx.close_left()
            ></div>
            <div class="app-main">
                <TopHeader />
                <main class="app-content">
                    {children()}
                </main>
            </div>
        </div>
    }
}
