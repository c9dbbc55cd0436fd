//! Route guard: gates a page on the session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every routed page. Decisions come from [`session::guard::evaluate`];
//! a [`GuardTracker`] makes sure each redirect is issued once per transition
//! rather than on every re-render.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::guard::evaluate;
use session::{GuardDecision, GuardRequirements, GuardTracker};

use crate::state::session::SessionSignal;

/// Render `children` only when the session satisfies `requirements`.
#[component]
pub fn RouteGuard(#[prop(optional)] requirements: GuardRequirements, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let navigate = use_navigate();

    let gate = requirements.clone();
    let decision = Memo::new(move |_| session.with(|state| evaluate(state, &gate)));

    let tracker = StoredValue::new(GuardTracker::new());
    Effect::new(move || {
        decision.track();
        let step = session.with(|state| tracker.try_update_value(|t| t.observe(state, &requirements)));
        if let Some(destination) = step.and_then(|s| s.navigate) {
            navigate(destination.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GuardDecision::Loading => view! { <LoadingScreen /> }.into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
        GuardDecision::Denied => view! { <AccessDenied /> }.into_any(),
        GuardDecision::Render => children().into_any(),
    }
}

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="auth-loading">
            <div class="auth-loading__spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}

#[component]
pub fn AccessDenied() -> impl IntoView {
    view! {
        <div class="access-denied">
            <h1>"Access Denied"</h1>
            <p>"You don't have permission to access this page."</p>
        </div>
    }
}
