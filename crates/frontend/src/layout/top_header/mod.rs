//! Header shown above the content on narrow screens.

use crate::layout::global_context::use_global_context;
use crate::routes::routes::menu_label;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let location = use_location();

    let title = move || {
        menu_label(&location.pathname.get())
            .unwrap_or("AquaShield")
            .to_string()
    };

    view! {
        <div class="top-header">
            <button
                class="top-header__icon-btn"
                on:click=move |_| ctx.toggle_left()
                title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
            >
                {move || if ctx.left_open.get() { icon("x") } else { icon("menu") }}
            </button>
            <span class="top-header__title">{title}</span>
        </div>
    }
}
