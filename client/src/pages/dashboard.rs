//! Admin dashboard: task statistics at a glance.
//!
//! Students have their own landing page and are sent there.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use serde_json::Value;
use session::resources::TASKS;
use session::{Destination, STUDENT_ROLE};

use crate::components::layout::DashboardShell;
use crate::net::client::{api_client, error_text};
use crate::state::session::SessionSignal;

const STAT_CARDS: [(&str, &str); 4] = [
    ("total_tasks", "Total Tasks"),
    ("my_tasks", "My Tasks"),
    ("pending_tasks", "Pending"),
    ("completed_tasks", "Completed"),
];

/// Labelled counts from a statistics payload; missing counts read as zero.
pub fn stat_cards(stats: &Value) -> Vec<(&'static str, u64)> {
    STAT_CARDS
        .iter()
        .map(|(key, label)| (*label, stats.get(*key).and_then(Value::as_u64).unwrap_or(0)))
        .collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <DashboardShell>
            <AdminDashboard />
        </DashboardShell>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let navigate = use_navigate();
    let stats = RwSignal::new(Value::Null);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        if session.with(|s| s.has_role(STUDENT_ROLE)) {
            navigate(Destination::StudentDashboard.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    leptos::task::spawn_local(async move {
        match TASKS.statistics(&api_client(session)).await {
            Ok(value) => stats.set(value),
            Err(e) => error.set(Some(error_text(&e))),
        }
    });

    let greeting = move || session.with(|s| s.user.as_ref().map(|u| format!("Welcome back, {}", u.name)).unwrap_or_default());

    view! {
        <section class="dashboard">
            <h1>{greeting}</h1>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="stat-grid">
                {move || {
                    stats
                        .with(stat_cards)
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="stat-card">
                                    <span class="stat-card__label">{label}</span>
                                    <span class="stat-card__value">{value}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
