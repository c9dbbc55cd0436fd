//! Sign-in page with the failed-attempt warning and lockout.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use session::api::{self, LoginRequest};
use session::validate::{FieldErrors, validate_login};
use session::{GuardRequirements, LoginNotice, SessionAccess};

use crate::components::route_guard::RouteGuard;
use crate::net::client::api_client;
use crate::state::session::SessionSignal;

/// Banner text for the attempt counter.
pub fn notice_text(notice: LoginNotice) -> Option<String> {
    match notice {
        LoginNotice::None => None,
        LoginNotice::Warning { remaining } => Some(format!(
            "Multiple failed attempts. {remaining} attempt{} remaining before sign-in is blocked.",
            if remaining == 1 { "" } else { "s" }
        )),
        LoginNotice::Blocked => Some("Too many failed attempts. Sign-in is blocked for this session.".to_owned()),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <RouteGuard requirements=GuardRequirements::public_only()>
            <LoginForm />
        </RouteGuard>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let field_errors = RwSignal::new(FieldErrors::new());

    let notice = move || session.with(|s| s.login_notice());
    let blocked = move || notice() == LoginNotice::Blocked;
    let busy = move || session.with(|s| s.is_loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() || blocked() {
            return;
        }
        let request = LoginRequest {
            email: email.get().trim().to_owned(),
            password: password.get(),
            remember: remember.get(),
        };
        let errors = validate_login(&request);
        let invalid = !errors.is_empty();
        field_errors.set(errors);
        if invalid {
            return;
        }
        session.write(|m| m.clear_error());

        leptos::task::spawn_local(async move {
            // Failures land in the session error; on success the public-only
            // guard performs the one redirect to the landing page.
            let _ = api::login(&api_client(session), &request).await;
        });
    };

    let field_error = move |field: &'static str| move || field_errors.with(|e| e.get(field).cloned());

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <Show when=move || notice() != LoginNotice::None>
                    <p class=move || if blocked() { "auth-notice auth-notice--blocked" } else { "auth-notice" }>
                        {move || notice_text(notice()).unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || session.with(|s| s.error.is_some())>
                    <p class="auth-error">{move || session.with(|s| s.error.clone().unwrap_or_default())}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <span class="field-error">{field_error("email")}</span>
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <span class="field-error">{field_error("password")}</span>
                    <label class="auth-form__remember">
                        <input
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <button type="submit" disabled=move || busy() || blocked()>
                        {move || if busy() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__footer">"No account? " <a href="/register">"Register"</a></p>
            </div>
        </div>
    }
}
