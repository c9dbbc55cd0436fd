//! `/`: send the visitor where they belong once the session settles.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::{Destination, SessionState};

use crate::components::route_guard::LoadingScreen;
use crate::state::session::SessionSignal;

/// Where `/` forwards to, or `None` while the session is still loading.
pub fn home_destination(state: &SessionState) -> Option<Destination> {
    if !state.is_settled() {
        return None;
    }
    Some(if state.is_authenticated { state.landing() } else { Destination::SignIn })
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(destination) = session.with(home_destination) {
            navigate(destination.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! { <LoadingScreen /> }
}
