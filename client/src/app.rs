//! Root component and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Creates the one [`SessionSignal`] for the app, provides it as context and
//! rehydrates it from `localStorage` once on mount. Permissions are not
//! persisted, so a restored session refetches them while still loading. Every page guards itself
//! with `RouteGuard` (public pages) or `DashboardShell` (signed-in pages).

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use session::api;

use crate::net::client::api_client;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::menus::MenusPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::roles::RolesPage;
use crate::pages::student_dashboard::StudentDashboardPage;
use crate::pages::tasks::TasksPage;
use crate::pages::users::UsersPage;
use crate::state::session::SessionSignal;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionSignal::new();
    provide_context(session);
    Effect::new(move || {
        leptos::task::spawn_local(async move { api::restore(&api_client(session)).await });
    });

    view! {
        <Title text="TaskDesk" />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <Route path=path!("/dashboard") view=DashboardPage />
                <Route path=path!("/student-dashboard") view=StudentDashboardPage />
                <Route path=path!("/tasks") view=TasksPage />
                <Route path=path!("/users") view=UsersPage />
                <Route path=path!("/roles") view=RolesPage />
                <Route path=path!("/menus") view=MenusPage />
                <Route path=path!("/profile") view=ProfilePage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a href="/">"Back to start"</a>
        </div>
    }
}
