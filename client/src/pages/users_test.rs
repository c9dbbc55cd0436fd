use super::*;
use serde_json::json;

fn input(name: &str, email: &str, password: &str) -> UserInput {
    UserInput {
        name: name.to_owned(),
        email: email.to_owned(),
        password: Some(password.to_owned()),
        password_confirmation: Some(password.to_owned()),
        ..UserInput::default()
    }
}

#[test]
fn valid_user_passes() {
    assert!(validate_user(&input("Bob", "bob@example.com", "secret123")).is_empty());
}

#[test]
fn short_password_and_bad_email_reported() {
    let errors = validate_user(&input("Bob", "bob", "short"));
    assert!(errors.contains_key("password"));
    assert!(errors.contains_key("email"));
    assert!(!errors.contains_key("name"));
}

#[test]
fn role_label_handles_both_role_shapes() {
    let named: UserRecord = serde_json::from_value(json!({"id": 1, "name": "A", "role": "admin"})).unwrap();
    let record: UserRecord =
        serde_json::from_value(json!({"id": 2, "name": "B", "role": {"id": 3, "name": "student"}})).unwrap();
    let none: UserRecord = serde_json::from_value(json!({"id": 3, "name": "C"})).unwrap();
    assert_eq!(role_label(&named), "admin");
    assert_eq!(role_label(&record), "student");
    assert_eq!(role_label(&none), "-");
}
