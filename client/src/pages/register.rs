//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use session::api::{self, RegisterRequest};
use session::validate::{FieldErrors, validate_registration};
use session::{GuardRequirements, SessionAccess};

use crate::components::route_guard::RouteGuard;
use crate::net::client::api_client;
use crate::state::session::SessionSignal;

/// Field checks plus the terms checkbox, which only this form has.
pub fn validate_form(request: &RegisterRequest, terms_accepted: bool) -> FieldErrors {
    let mut errors = validate_registration(request);
    if !terms_accepted {
        errors.insert("terms", "You must accept the terms and conditions".to_owned());
    }
    errors
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <RouteGuard requirements=GuardRequirements::public_only()>
            <RegisterForm />
        </RouteGuard>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let terms = RwSignal::new(false);
    let field_errors = RwSignal::new(FieldErrors::new());
    let busy = move || session.with(|s| s.is_loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let request = RegisterRequest {
            name: name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
            password_confirmation: confirmation.get(),
        };
        let errors = validate_form(&request, terms.get());
        let invalid = !errors.is_empty();
        field_errors.set(errors);
        if invalid {
            return;
        }
        session.write(|m| m.clear_error());

        leptos::task::spawn_local(async move {
            // Failures land in the session error; on success the public-only
            // guard performs the one redirect to the landing page.
            let _ = api::register(&api_client(session), &request).await;
        });
    };

    let field_error = move |field: &'static str| move || field_errors.with(|e| e.get(field).cloned());

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <Show when=move || session.with(|s| s.error.is_some())>
                    <p class="auth-error">{move || session.with(|s| s.error.clone().unwrap_or_default())}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label for="name">"Name"</label>
                    <input id="name" type="text" prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev)) />
                    <span class="field-error">{field_error("name")}</span>
                    <label for="email">"Email"</label>
                    <input id="email" type="email" prop:value=move || email.get() on:input=move |ev| email.set(event_target_value(&ev)) />
                    <span class="field-error">{field_error("email")}</span>
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <span class="field-error">{field_error("password")}</span>
                    <label for="password_confirmation">"Confirm password"</label>
                    <input
                        id="password_confirmation"
                        type="password"
                        prop:value=move || confirmation.get()
                        on:input=move |ev| confirmation.set(event_target_value(&ev))
                    />
                    <span class="field-error">{field_error("password_confirmation")}</span>
                    <label class="auth-form__terms">
                        <input type="checkbox" prop:checked=move || terms.get() on:change=move |ev| terms.set(event_target_checked(&ev)) />
                        "I accept the terms and conditions"
                    </label>
                    <span class="field-error">{field_error("terms")}</span>
                    <button type="submit" disabled=busy>
                        {move || if busy() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__footer">"Already registered? " <a href="/login">"Sign in"</a></p>
            </div>
        </div>
    }
}
