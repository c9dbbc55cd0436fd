//! Role administration. Requires the `/roles` permission.

use leptos::prelude::*;
use serde_json::json;
use session::GuardRequirements;
use session::resources::{ROLES, RoleRecord};

use crate::components::layout::DashboardShell;
use crate::net::client::{api_client, error_text};
use crate::pages::{ListState, delete_and_reload, load_list};
use crate::state::session::SessionSignal;

#[component]
pub fn RolesPage() -> impl IntoView {
    view! {
        <DashboardShell requirements=GuardRequirements::protected().with_permission("/roles")>
            <RoleAdmin />
        </DashboardShell>
    }
}

#[component]
fn RoleAdmin() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let list = ListState::<RoleRecord>::new();
    let name = RwSignal::new(String::new());

    load_list(ROLES, session, list);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let role_name = name.get().trim().to_owned();
        if role_name.is_empty() {
            list.error.set(Some("Role name is required".to_owned()));
            return;
        }
        leptos::task::spawn_local(async move {
            match ROLES.create(&api_client(session), &json!({ "name": role_name })).await {
                Ok(_) => {
                    name.set(String::new());
                    load_list(ROLES, session, list);
                }
                Err(e) => list.error.set(Some(error_text(&e))),
            }
        });
    };

    view! {
        <section class="roles">
            <h1>"Roles"</h1>
            <Show when=move || list.error.get().is_some()>
                <p class="page-error">{move || list.error.get().unwrap_or_default()}</p>
            </Show>
            <form class="inline-form" on:submit=on_create>
                <input placeholder="Role name" prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev)) />
                <button type="submit">"Add role"</button>
            </form>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || list.items.get() key=|role| role.id.to_string() let:role>
                        {
                            let id = role.id.clone();
                            view! {
                                <tr>
                                    <td>{role.name.clone()}</td>
                                    <td>{role.description.clone().unwrap_or_default()}</td>
                                    <td class="data-table__actions">
                                        <button on:click=move |_| delete_and_reload(ROLES, session, list, id.clone())>"Delete"</button>
                                    </td>
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </table>
        </section>
    }
}
