use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"404"</h1>
                <h2>"Page not found"</h2>
                <A href="/" attr:class="btn-primary">"Back to login"</A>
            </div>
        </div>
    }
}
