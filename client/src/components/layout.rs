//! Signed-in page frame: sidebar, top bar, guarded content.

use leptos::prelude::*;
use session::GuardRequirements;

use super::app_sidebar::AppSidebar;
use super::route_guard::RouteGuard;
use super::top_nav::TopNav;

#[component]
pub fn DashboardShell(#[prop(optional)] requirements: GuardRequirements, children: ChildrenFn) -> impl IntoView {
    view! {
        <RouteGuard requirements=requirements>
            <div class="layout">
                <AppSidebar />
                <div class="layout__main">
                    <TopNav />
                    <main class="layout__content">{children()}</main>
                </div>
            </div>
        </RouteGuard>
    }
}
