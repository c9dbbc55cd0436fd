//! User administration. Requires the `/users` permission.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use session::GuardRequirements;
use session::resources::{USERS, UserInput, UserRecord};
use session::validate::{FieldErrors, is_valid_email, is_valid_name, validate_new_password};

use crate::components::layout::DashboardShell;
use crate::net::client::{api_client, error_text};
use crate::pages::{ListState, delete_and_reload, load_list};
use crate::state::session::SessionSignal;

/// Field checks for the create-user form.
pub fn validate_user(input: &UserInput) -> FieldErrors {
    let mut errors = validate_new_password(
        input.password.as_deref().unwrap_or_default(),
        input.password_confirmation.as_deref().unwrap_or_default(),
    );
    if !is_valid_name(&input.name) {
        errors.insert("name", "Name must be between 2 and 50 characters".to_owned());
    }
    if !is_valid_email(&input.email) {
        errors.insert("email", "Email is invalid".to_owned());
    }
    errors
}

/// Display text for a user's role column.
pub fn role_label(user: &UserRecord) -> String {
    user.role.as_ref().map(|r| r.name().to_owned()).unwrap_or_else(|| "-".to_owned())
}

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <DashboardShell requirements=GuardRequirements::protected().with_permission("/users")>
            <UserAdmin />
        </DashboardShell>
    }
}

#[component]
fn UserAdmin() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let list = ListState::<UserRecord>::new();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::new());

    load_list(USERS, session, list);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = UserInput {
            name: name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: Some(password.get()),
            password_confirmation: Some(password.get()),
            ..UserInput::default()
        };
        let errors = validate_user(&input);
        let invalid = !errors.is_empty();
        field_errors.set(errors);
        if invalid {
            return;
        }
        leptos::task::spawn_local(async move {
            match USERS.create(&api_client(session), &input).await {
                Ok(_) => {
                    name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    load_list(USERS, session, list);
                }
                Err(e) => list.error.set(Some(error_text(&e))),
            }
        });
    };

    let field_error = move |field: &'static str| move || field_errors.with(|e| e.get(field).cloned());

    view! {
        <section class="users">
            <h1>"Users"</h1>
            <Show when=move || list.error.get().is_some()>
                <p class="page-error">{move || list.error.get().unwrap_or_default()}</p>
            </Show>
            <form class="inline-form" on:submit=on_create>
                <input placeholder="Name" prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev)) />
                <span class="field-error">{field_error("name")}</span>
                <input placeholder="Email" prop:value=move || email.get() on:input=move |ev| email.set(event_target_value(&ev)) />
                <span class="field-error">{field_error("email")}</span>
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <span class="field-error">{field_error("password")}</span>
                <button type="submit">"Add user"</button>
            </form>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || list.items.get() key=|user| user.id.to_string() let:user>
                        {
                            let id = user.id.clone();
                            view! {
                                <tr>
                                    <td>{user.name.clone()}</td>
                                    <td>{user.email.clone().unwrap_or_default()}</td>
                                    <td>{role_label(&user)}</td>
                                    <td class="data-table__actions">
                                        <button on:click=move |_| delete_and_reload(USERS, session, list, id.clone())>"Delete"</button>
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
