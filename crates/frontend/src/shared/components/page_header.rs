use crate::routes::routes::menu_icon;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Heading of a dashboard page. `route` picks the same icon the sidebar shows
/// for the page; badges, search boxes and filters go into `children`.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] route: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let page_icon = route.and_then(menu_icon);

    view! {
        <div class="page-header">
            <div class="page-header__content">
                {page_icon.map(|name| view! {
                    <span class="page-header__icon">{icon(name)}</span>
                })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {subtitle.map(|s| view! { <div class="page-header__subtitle">{s}</div> })}
                </div>
            </div>
            <div class="page-header__actions">{children()}</div>
        </div>
    }
}
