use contracts::system::auth::{validate_login, LoginRequest, LoginRole};
use contracts::system::languages::LOGIN_LANGUAGES;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (role, set_role) = signal(Option::<LoginRole>::None);
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (language, set_language) = signal("en".to_string());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let session = use_session();
    let navigate = use_navigate();

    let can_submit = move || validate_login(role.get(), &username.get()).is_ok();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            role: role.get_untracked(),
            username: username.get_untracked(),
            password: password.get_untracked(),
            language: language.get_untracked(),
        };
        match request.into_session() {
            Ok(opened) => {
                set_error_message.set(None);
                session.login(opened);
                navigate("/overview", Default::default());
            }
            Err(e) => set_error_message.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-box__brand">
                    {icon("droplet")}
                    <h1>"AquaShield"</h1>
                </div>
                <h2>"Water Quality Monitoring & Early Warning"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label>"Select your role"</label>
                        <div class="role-cards">
                            {LoginRole::all().into_iter().map(|r| view! {
                                <button
                                    type="button"
                                    class="role-card"
                                    class:role-card--selected=move || role.get() == Some(r)
                                    on:click=move |_| set_role.set(Some(r))
                                >
                                    <span class="role-card__title">{r.display_name()}</span>
                                    <span class="role-card__description">{r.description()}</span>
                                </button>
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="language">"Language"</label>
                        <select
                            id="language"
                            prop:value=move || language.get()
                            on:change=move |ev| set_language.set(event_target_value(&ev))
                        >
                            {LOGIN_LANGUAGES.into_iter().map(|(code, label)| view! {
                                <option value=code>{label}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="Enter your username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || !can_submit()
                    >
                        "Access Dashboard"
                    </button>
                </form>

                <div class="login-info">
                    <p>"Demo credentials: Any username with selected role"</p>
                </div>
            </div>
        </div>
    }
}
