//! Student landing page: the tasks assigned to the signed-in student.

use leptos::prelude::*;
use session::resources::{TASKS, Task};

use crate::components::layout::DashboardShell;
use crate::net::client::{api_client, error_text};
use crate::pages::ListState;
use crate::state::session::SessionSignal;

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    view! {
        <DashboardShell>
            <StudentDashboard />
        </DashboardShell>
    }
}

#[component]
fn StudentDashboard() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let list = ListState::<Task>::new();

    list.loading.set(true);
    leptos::task::spawn_local(async move {
        match TASKS.mine(&api_client(session), &[]).await {
            Ok(listing) => list.items.set(listing.items),
            Err(e) => list.error.set(Some(error_text(&e))),
        }
        list.loading.set(false);
    });

    view! {
        <section class="student-dashboard">
            <h1>"My Tasks"</h1>
            <Show when=move || list.error.get().is_some()>
                <p class="page-error">{move || list.error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !list.loading.get() fallback=|| view! { <p>"Loading tasks..."</p> }>
                <ul class="task-list">
                    <For each=move || list.items.get() key=|task| task.id.to_string() let:task>
                        <li class="task-list__item">
                            <span class="task-list__title">{task.title.clone()}</span>
                            <span class=format!("badge badge--{}", task.status)>{task.status.label()}</span>
                            <span class="task-list__deadline">{task.deadline.clone().unwrap_or_default()}</span>
                        </li>
                    </For>
                </ul>
            </Show>
        </section>
    }
}
