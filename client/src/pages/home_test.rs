use super::*;
use serde_json::json;
use session::User;

fn signed_in(role: &str) -> SessionState {
    let user: User = serde_json::from_value(json!({"id": 1, "name": "A", "role": role})).unwrap();
    SessionState {
        user: Some(user),
        access_token: Some("tok".to_owned()),
        is_authenticated: true,
        is_initialized: true,
        ..SessionState::default()
    }
}

#[test]
fn waits_while_uninitialized() {
    assert_eq!(home_destination(&SessionState::default()), None);
}

#[test]
fn signed_out_goes_to_sign_in() {
    let state = SessionState { is_initialized: true, ..SessionState::default() };
    assert_eq!(home_destination(&state), Some(Destination::SignIn));
}

#[test]
fn signed_in_goes_to_landing() {
    assert_eq!(home_destination(&signed_in("admin")), Some(Destination::Dashboard));
    assert_eq!(home_destination(&signed_in("student")), Some(Destination::StudentDashboard));
}
