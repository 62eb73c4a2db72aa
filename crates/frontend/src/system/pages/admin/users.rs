use super::state::AdminState;
use crate::shared::components::status_badge::classified_badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use contracts::shared::filter::search_entities;
use contracts::system::users::system_users;
use leptos::prelude::*;

#[component]
pub fn UsersTab(state: RwSignal<AdminState>) -> impl IntoView {
    let query = move || state.with(|s| s.user_query.clone());
    let visible = Memo::new(move |_| {
        let q = query();
        search_entities(system_users(), &q)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    view! {
        <div class="card">
            <div class="card__header">
                <h3>"User Management"</h3>
                <div class="search-box">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Search users..."
                        prop:value=query
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.user_query = value);
                        }
                    />
                </div>
            </div>
            <table class="table__data">
                <thead>
                    <tr>
                        <th class="table__header-cell">"User"</th>
                        <th class="table__header-cell">"Role"</th>
                        <th class="table__header-cell">"Status"</th>
                        <th class="table__header-cell">"Last Login"</th>
                        <th class="table__header-cell">"Permissions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || visible.get()
                        key=|user| user.id
                        children=move |user| {
                            let q = query();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">
                                        <div>{highlight_matches(&user.name, &q)}</div>
                                        <div class="text-muted">{highlight_matches(&user.email, &q)}</div>
                                    </td>
                                    <td class="table__cell">{classified_badge(&user.role, user.role.code())}</td>
                                    <td class="table__cell">{classified_badge(&user.status, user.status.code())}</td>
                                    <td class="table__cell">{user.last_login.clone()}</td>
                                    <td class="table__cell">
                                        {user.permission_labels().into_iter().map(|p| view! {
                                            <span class="chip">{p}</span>
                                        }).collect_view()}
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || visible.with(|v| v.is_empty())>
                <p class="text-muted">"No users match the search"</p>
            </Show>
        </div>
    }
}
