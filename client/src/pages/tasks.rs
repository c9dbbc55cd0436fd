//! Task list with a status filter, a create form and row actions.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use leptos::prelude::*;
use session::Id;
use session::resources::{TASKS, Task, TaskInput, TaskStatus};

use crate::components::layout::DashboardShell;
use crate::net::client::{api_client, error_text};
use crate::pages::{ListState, delete_and_reload, load_list};
use crate::state::session::SessionSignal;

/// Build a task body from raw form fields. Blank optional fields are omitted.
///
/// # Errors
///
/// Returns the message to show when the title is blank or the status unknown.
pub fn task_input(title: &str, description: &str, status: &str, deadline: &str) -> Result<TaskInput, String> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Title is required".to_owned());
    }
    let status = status.parse::<TaskStatus>().map_err(|e| e.to_string())?;
    let optional = |value: &str| Some(value.trim().to_owned()).filter(|v| !v.is_empty());
    Ok(TaskInput {
        title: title.to_owned(),
        description: optional(description),
        status,
        deadline: optional(deadline),
        assigned_to: None,
    })
}

/// Rows whose status matches `filter`; an empty filter keeps everything.
pub fn filter_tasks(tasks: &[Task], filter: &str) -> Vec<Task> {
    tasks.iter().filter(|t| filter.is_empty() || t.status.as_str() == filter).cloned().collect()
}

#[component]
pub fn TasksPage() -> impl IntoView {
    view! {
        <DashboardShell>
            <TaskBoard />
        </DashboardShell>
    }
}

#[component]
fn TaskBoard() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let list = ListState::<Task>::new();
    let filter = RwSignal::new(String::new());

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let status = RwSignal::new(TaskStatus::Pending.as_str().to_owned());
    let deadline = RwSignal::new(String::new());

    load_list(TASKS, session, list);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = match task_input(&title.get(), &description.get(), &status.get(), &deadline.get()) {
            Ok(input) => input,
            Err(message) => {
                list.error.set(Some(message));
                return;
            }
        };
        leptos::task::spawn_local(async move {
            match TASKS.create(&api_client(session), &input).await {
                Ok(_) => {
                    title.set(String::new());
                    description.set(String::new());
                    deadline.set(String::new());
                    load_list(TASKS, session, list);
                }
                Err(e) => list.error.set(Some(error_text(&e))),
            }
        });
    };

    let complete = move |id: Id| {
        leptos::task::spawn_local(async move {
            match TASKS.complete(&api_client(session), &id).await {
                Ok(_) => load_list(TASKS, session, list),
                Err(e) => list.error.set(Some(error_text(&e))),
            }
        });
    };

    view! {
        <section class="tasks">
            <header class="page-header">
                <h1>"Tasks"</h1>
                <select on:change=move |ev| filter.set(event_target_value(&ev))>
                    <option value="">"All statuses"</option>
                    {TaskStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </header>
            <Show when=move || list.error.get().is_some()>
                <p class="page-error">{move || list.error.get().unwrap_or_default()}</p>
            </Show>
            <form class="task-form" on:submit=on_create>
                <input
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <input
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <select prop:value=move || status.get() on:change=move |ev| status.set(event_target_value(&ev))>
                    {TaskStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
                <input type="date" prop:value=move || deadline.get() on:input=move |ev| deadline.set(event_target_value(&ev)) />
                <button type="submit">"Add task"</button>
            </form>
            <Show when=move || !list.loading.get() fallback=|| view! { <p>"Loading tasks..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Status"</th>
                            <th>"Deadline"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || list.items.with(|tasks| filter.with(|f| filter_tasks(tasks, f)))
                            key=|task| (task.id.to_string(), task.status)
                            let:task
                        >
                            {
                                let complete_id = task.id.clone();
                                let delete_id = task.id.clone();
                                let done = task.status != TaskStatus::Pending;
                                view! {
                                    <tr>
                                        <td>{task.title.clone()}</td>
                                        <td>{task.status.label()}</td>
                                        <td>{task.deadline.clone().unwrap_or_default()}</td>
                                        <td class="data-table__actions">
                                            <button disabled=done on:click=move |_| complete(complete_id.clone())>
                                                "Complete"
                                            </button>
                                            <button on:click=move |_| delete_and_reload(TASKS, session, list, delete_id.clone())>
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        </For>
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
