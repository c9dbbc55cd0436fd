//! Top bar with the signed-in user and a sign-out button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::api;

use crate::net::client::api_client;
use crate::state::session::SessionSignal;

#[component]
pub fn TopNav() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            api::logout(&api_client(session)).await;
            busy.set(false);
            navigate("/login", NavigateOptions::default());
        });
    };

    let display_name = move || session.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let role = move || session.with(|s| s.role_name().unwrap_or_default().to_owned());

    view! {
        <header class="top-nav">
            <span class="top-nav__user">{display_name}</span>
            <span class="top-nav__role">{role}</span>
            <button class="top-nav__logout" on:click=on_logout disabled=move || busy.get()>
                "Sign out"
            </button>
        </header>
    }
}
