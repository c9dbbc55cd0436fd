//! Sidebar navigation filtered by the session's permissions.

#[cfg(test)]
#[path = "app_sidebar_test.rs"]
mod app_sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use session::SessionState;

use crate::state::session::SessionSignal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
    /// Permission path required to see the entry; `None` means everyone.
    pub permission: Option<&'static str>,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { title: "Dashboard", href: "/dashboard", permission: None },
    NavItem { title: "Tasks", href: "/tasks", permission: None },
    NavItem { title: "Users", href: "/users", permission: Some("/users") },
    NavItem { title: "Roles", href: "/roles", permission: Some("/roles") },
    NavItem { title: "Menus", href: "/menus", permission: Some("/menus") },
    NavItem { title: "Profile", href: "/profile", permission: None },
];

/// Entries `state` may see, with the dashboard entry pointed at the user's
/// landing page.
pub fn nav_items(state: &SessionState) -> Vec<NavItem> {
    let landing = state.landing().path();
    NAV_ITEMS
        .iter()
        .filter(|item| item.permission.is_none_or(|p| state.has_permission(p)))
        .map(|item| if item.href == "/dashboard" { NavItem { href: landing, ..*item } } else { *item })
        .collect()
}

#[component]
pub fn AppSidebar() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let location = use_location();

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"TaskDesk"</div>
            <ul class="sidebar__menu">
                {move || {
                    let current = location.pathname.get();
                    session
                        .with(nav_items)
                        .into_iter()
                        .map(|item| {
                            let class = if current == item.href { "sidebar__item sidebar__item--active" } else { "sidebar__item" };
                            view! {
                                <li class=class>
                                    <a href=item.href>{item.title}</a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}
