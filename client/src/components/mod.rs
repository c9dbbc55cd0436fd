//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session from context ([`crate::state::session::SessionSignal`])
//! and leave data fetching to pages.

pub mod app_sidebar;
pub mod layout;
pub mod route_guard;
pub mod top_nav;
