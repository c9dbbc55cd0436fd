use super::*;

fn request() -> RegisterRequest {
    RegisterRequest {
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "secret123".to_owned(),
        password_confirmation: "secret123".to_owned(),
    }
}

#[test]
fn valid_form_with_terms_passes() {
    assert!(validate_form(&request(), true).is_empty());
}

#[test]
fn terms_are_required() {
    let errors = validate_form(&request(), false);
    assert_eq!(errors.keys().copied().collect::<Vec<_>>(), ["terms"]);
}

#[test]
fn field_errors_and_terms_reported_together() {
    let bad = RegisterRequest { password_confirmation: "different".to_owned(), ..request() };
    let errors = validate_form(&bad, false);
    assert!(errors.contains_key("password_confirmation"));
    assert!(errors.contains_key("terms"));
}
