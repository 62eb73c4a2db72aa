//! Sidebar with the dashboard menu, system status and logout.

use crate::layout::global_context::use_global_context;
use crate::routes::routes::MENU_ITEMS;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use crate::system::settings::context::use_settings;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use thaw::{Flex, FlexGap};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_session();
    let settings = use_settings();
    let location = use_location();
    let navigate = use_navigate();

    let logout = {
        let navigate = navigate.clone();
        move |_| {
            session.logout();
            ctx.close_left();
            navigate("/", Default::default());
        }
    };

    view! {
        <aside class="app-sidebar" class:app-sidebar--open=move || ctx.left_open.get()>
            <div class="app-sidebar__brand">
                {icon("droplet")}
                <div>
                    <div class="app-sidebar__title">"AquaShield"</div>
                    <div class="app-sidebar__subtitle">{move || settings.config.get().app.region}</div>
                </div>
            </div>

            <nav class="app-sidebar__content">
                {MENU_ITEMS.into_iter().map(|(path, label, icon_name)| {
                    let pathname = location.pathname;
                    let navigate = navigate.clone();
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || pathname.get() == path
                            on:click=move |_| {
                                leptos::logging::log!("navigate to {}", path);
                                ctx.close_left();
                                navigate(path, Default::default());
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(icon_name)}
                                <span>{label}</span>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </nav>

            <div class="app-sidebar__footer">
                <Flex gap=FlexGap::Small>
                    <span class="badge badge--success">"System Online"</span>
                    <span class="badge badge--muted">{move || settings.config.get().app.version}</span>
                </Flex>
                <div class="app-sidebar__user">
                    {icon("user")}
                    <span>{move || session.display_name()}</span>
                </div>
                <button class="button button--secondary app-sidebar__logout" on:click=logout>
                    {icon("log-out")}
                    " Logout"
                </button>
            </div>
        </aside>
    }
}
