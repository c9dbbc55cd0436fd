use super::*;
use session::TransportError;

#[test]
fn error_text_prefers_server_message() {
    let err = ApiError::Status { status: 422, message: Some("The title field is required.".to_owned()) };
    assert_eq!(error_text(&err), "The title field is required.");
}

#[test]
fn error_text_for_bare_forbidden() {
    let err = ApiError::Status { status: 403, message: None };
    assert_eq!(error_text(&err), "You do not have access to this resource.");
}

#[test]
fn error_text_for_transport_failure() {
    let err = ApiError::Transport(TransportError::new("offline"));
    assert_eq!(error_text(&err), "Could not reach the server.");
}

#[test]
fn api_url_is_absolute_or_rooted() {
    assert!(API_URL.starts_with("http") || API_URL.starts_with('/'));
}
