use super::*;
use serde_json::json;
use session::{Permission, User};

fn state_for(role: &str, permissions: &[&str]) -> SessionState {
    let user: User = serde_json::from_value(json!({"id": 1, "name": "A", "role": role})).unwrap();
    SessionState {
        user: Some(user),
        access_token: Some("tok".to_owned()),
        is_authenticated: true,
        is_initialized: true,
        permissions: permissions.iter().map(|p| Permission::for_path(p)).collect(),
        ..SessionState::default()
    }
}

fn titles(items: &[NavItem]) -> Vec<&'static str> {
    items.iter().map(|item| item.title).collect()
}

#[test]
fn admin_sees_every_entry() {
    assert_eq!(titles(&nav_items(&state_for("admin", &[]))), ["Dashboard", "Tasks", "Users", "Roles", "Menus", "Profile"]);
}

#[test]
fn unrestricted_entries_always_visible() {
    assert_eq!(titles(&nav_items(&state_for("manager", &[]))), ["Dashboard", "Tasks", "Profile"]);
}

#[test]
fn granted_permission_reveals_entry() {
    assert_eq!(titles(&nav_items(&state_for("manager", &["/users"]))), ["Dashboard", "Tasks", "Users", "Profile"]);
}

#[test]
fn student_dashboard_entry_points_at_student_landing() {
    let items = nav_items(&state_for("student", &[]));
    assert_eq!(items[0].href, "/student-dashboard");
}
