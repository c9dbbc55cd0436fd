//! Menu (permission) administration. Requires the `/menus` permission.

#[cfg(test)]
#[path = "menus_test.rs"]
mod menus_test;

use leptos::prelude::*;
use serde_json::{Value, json};
use session::GuardRequirements;
use session::resources::{MENUS, MenuRecord};

use crate::components::layout::DashboardShell;
use crate::net::client::{api_client, error_text};
use crate::pages::{ListState, delete_and_reload, load_list};
use crate::state::session::SessionSignal;

/// Menus sorted by their `order` (unordered entries last, by name).
pub fn sorted_menus(menus: &[MenuRecord]) -> Vec<MenuRecord> {
    let mut sorted = menus.to_vec();
    sorted.sort_by(|a, b| {
        a.order
            .unwrap_or(i64::MAX)
            .cmp(&b.order.unwrap_or(i64::MAX))
            .then_with(|| a.name.cmp(&b.name))
    });
    sorted
}

/// Reorder payload after swapping the entry at `index` with the one above it.
pub fn move_up_payload(menus: &[MenuRecord], index: usize) -> Option<Value> {
    if index == 0 || index >= menus.len() {
        return None;
    }
    let mut ids: Vec<_> = menus.iter().map(|m| m.id.clone()).collect();
    ids.swap(index - 1, index);
    let entries: Vec<Value> = ids.iter().enumerate().map(|(i, id)| json!({ "id": id, "order": i + 1 })).collect();
    Some(json!({ "menus": entries }))
}

#[component]
pub fn MenusPage() -> impl IntoView {
    view! {
        <DashboardShell requirements=GuardRequirements::protected().with_permission("/menus")>
            <MenuAdmin />
        </DashboardShell>
    }
}

#[component]
fn MenuAdmin() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let list = ListState::<MenuRecord>::new();

    load_list(MENUS, session, list);

    let move_up = move |index: usize| {
        let Some(payload) = list.items.with_untracked(|menus| move_up_payload(&sorted_menus(menus), index)) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match MENUS.reorder(&api_client(session), &payload).await {
                Ok(()) => load_list(MENUS, session, list),
                Err(e) => list.error.set(Some(error_text(&e))),
            }
        });
    };

    view! {
        <section class="menus">
            <h1>"Menus"</h1>
            <Show when=move || list.error.get().is_some()>
                <p class="page-error">{move || list.error.get().unwrap_or_default()}</p>
            </Show>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Path"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        list.items
                            .with(|menus| sorted_menus(menus))
                            .into_iter()
                            .enumerate()
                            .map(|(index, menu)| {
                                let id = menu.id.clone();
                                view! {
                                    <tr>
                                        <td>{menu.name.clone()}</td>
                                        <td>{menu.path.clone().unwrap_or_default()}</td>
                                        <td class="data-table__actions">
                                            <button disabled={index == 0} on:click=move |_| move_up(index)>"Move up"</button>
                                            <button on:click=move |_| delete_and_reload(MENUS, session, list, id.clone())>"Delete"</button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </section>
    }
}
