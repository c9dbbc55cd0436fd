//! The session, held in a reactive signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`SessionSignal`] is provided as context at the app root. Views read
//! it with [`SessionSignal::get`] (tracked, so they re-render on change);
//! request code goes through [`SessionAccess`], whose reads are untracked and
//! whose writes are a single signal update per transition.

use leptos::prelude::*;
use session::{SessionAccess, SessionManager, SessionState};

use crate::util::storage::BrowserStore;

#[derive(Clone, Copy, Debug)]
pub struct SessionSignal(RwSignal<SessionManager<BrowserStore>>);

impl SessionSignal {
    /// Fresh, uninitialized session over `localStorage`.
    pub fn new() -> Self {
        Self(RwSignal::new(SessionManager::new(BrowserStore)))
    }

    /// Tracked copy of the current state.
    pub fn get(&self) -> SessionState {
        self.0.with(|m| m.state().clone())
    }

    /// Tracked projection of the current state.
    pub fn with<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        self.0.with(|m| f(m.state()))
    }
}

impl Default for SessionSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionAccess for SessionSignal {
    type Store = BrowserStore;

    fn read<R>(&self, f: impl FnOnce(&SessionManager<BrowserStore>) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut SessionManager<BrowserStore>)) {
        self.0.update(f);
    }
}
