//! Profile page: edit name and email, change password.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use serde_json::{Map, Value};
use session::{SessionAccess, api};
use session::validate::{FieldErrors, is_valid_email, is_valid_name, validate_new_password};

use crate::components::layout::DashboardShell;
use crate::net::client::api_client;
use crate::state::session::SessionSignal;

/// Changed-details patch for `PUT /auth/profile`.
///
/// # Errors
///
/// Returns the per-field messages when a value is invalid.
pub fn details_patch(name: &str, email: &str) -> Result<Map<String, Value>, FieldErrors> {
    let (name, email) = (name.trim(), email.trim());
    let mut errors = FieldErrors::new();
    if !is_valid_name(name) {
        errors.insert("name", "Name must be between 2 and 50 characters".to_owned());
    }
    if !is_valid_email(email) {
        errors.insert("email", "Email is invalid".to_owned());
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    let mut patch = Map::new();
    patch.insert("name".to_owned(), Value::from(name));
    patch.insert("email".to_owned(), Value::from(email));
    Ok(patch)
}

/// Password-change patch for `PUT /auth/profile`.
///
/// # Errors
///
/// Returns the per-field messages when the new password is invalid or the
/// current one is missing.
pub fn password_patch(current: &str, password: &str, confirmation: &str) -> Result<Map<String, Value>, FieldErrors> {
    let mut errors = validate_new_password(password, confirmation);
    if current.is_empty() {
        errors.insert("current_password", "Current password is required".to_owned());
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    let mut patch = Map::new();
    patch.insert("current_password".to_owned(), Value::from(current));
    patch.insert("password".to_owned(), Value::from(password));
    patch.insert("password_confirmation".to_owned(), Value::from(confirmation));
    Ok(patch)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <DashboardShell>
            <Profile />
        </DashboardShell>
    }
}

#[component]
fn Profile() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let current_user = session.read(|m| m.state().user.clone());
    let name = RwSignal::new(current_user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let email = RwSignal::new(current_user.and_then(|u| u.email).unwrap_or_default());
    let current_password = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::new());
    let info = RwSignal::new(String::new());

    let submit = move |patch: Result<Map<String, Value>, FieldErrors>, done: &'static str| {
        let patch = match patch {
            Ok(patch) => patch,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(FieldErrors::new());
        leptos::task::spawn_local(async move {
            match api::update_profile(&api_client(session), &patch).await {
                Ok(_) => {
                    info.set(done.to_owned());
                    current_password.set(String::new());
                    password.set(String::new());
                    confirmation.set(String::new());
                }
                Err(_) => info.set(session.read(|m| m.state().error.clone().unwrap_or_default())),
            }
        });
    };

    let on_details = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(details_patch(&name.get(), &email.get()), "Profile updated");
    };
    let on_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(password_patch(&current_password.get(), &password.get(), &confirmation.get()), "Password updated");
    };

    let field_error = move |field: &'static str| move || field_errors.with(|e| e.get(field).cloned());
    let role = move || session.with(|s| s.role_name().unwrap_or("-").to_owned());

    view! {
        <section class="profile">
            <h1>"Profile"</h1>
            <p class="profile__role">"Role: " {role}</p>
            <Show when=move || !info.get().is_empty()>
                <p class="page-info">{move || info.get()}</p>
            </Show>
            <form class="profile-form" on:submit=on_details>
                <label for="name">"Name"</label>
                <input id="name" prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev)) />
                <span class="field-error">{field_error("name")}</span>
                <label for="email">"Email"</label>
                <input id="email" type="email" prop:value=move || email.get() on:input=move |ev| email.set(event_target_value(&ev)) />
                <span class="field-error">{field_error("email")}</span>
                <button type="submit">"Save profile"</button>
            </form>
            <form class="profile-form" on:submit=on_password>
                <label for="current_password">"Current password"</label>
                <input
                    id="current_password"
                    type="password"
                    prop:value=move || current_password.get()
                    on:input=move |ev| current_password.set(event_target_value(&ev))
                />
                <span class="field-error">{field_error("current_password")}</span>
                <label for="new_password">"New password"</label>
                <input
                    id="new_password"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <span class="field-error">{field_error("password")}</span>
                <label for="confirm_password">"Confirm new password"</label>
                <input
                    id="confirm_password"
                    type="password"
                    prop:value=move || confirmation.get()
                    on:input=move |ev| confirmation.set(event_target_value(&ev))
                />
                <span class="field-error">{field_error("password_confirmation")}</span>
                <button type="submit">"Change password"</button>
            </form>
        </section>
    }
}
