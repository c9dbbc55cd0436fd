//! Route-level pages.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its data fetching and form state and delegates chrome to
//! `components`. Guarding is part of the page so the route table stays flat.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod menus;
pub mod profile;
pub mod register;
pub mod roles;
pub mod student_dashboard;
pub mod tasks;
pub mod users;

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use session::Id;
use session::resources::Resource;

use crate::net::client::{api_client, error_text};
use crate::state::session::SessionSignal;

/// Rows and status for a page backed by one listing.
pub(crate) struct ListState<M: Send + Sync + 'static> {
    pub items: RwSignal<Vec<M>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<M: Send + Sync + 'static> Clone for ListState<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: Send + Sync + 'static> Copy for ListState<M> {}

impl<M: Send + Sync + 'static> ListState<M> {
    pub fn new() -> Self {
        Self { items: RwSignal::new(Vec::new()), loading: RwSignal::new(false), error: RwSignal::new(None) }
    }
}

/// Fetch `resource`'s listing into `list`.
pub(crate) fn load_list<M>(resource: Resource<M>, session: SessionSignal, list: ListState<M>)
where
    M: DeserializeOwned + Send + Sync + 'static,
{
    list.loading.set(true);
    leptos::task::spawn_local(async move {
        match resource.list(&api_client(session), &[]).await {
            Ok(listing) => {
                list.items.set(listing.items);
                list.error.set(None);
            }
            Err(e) => list.error.set(Some(error_text(&e))),
        }
        list.loading.set(false);
    });
}

/// Soft-delete `id` from `resource`, then reload.
pub(crate) fn delete_and_reload<M>(resource: Resource<M>, session: SessionSignal, list: ListState<M>, id: Id)
where
    M: DeserializeOwned + Send + Sync + 'static,
{
    leptos::task::spawn_local(async move {
        match resource.delete(&api_client(session), &id).await {
            Ok(()) => load_list(resource, session, list),
            Err(e) => list.error.set(Some(error_text(&e))),
        }
    });
}
