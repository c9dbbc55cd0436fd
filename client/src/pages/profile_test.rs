use super::*;
use serde_json::json;

#[test]
fn details_patch_trims_values() {
    let patch = details_patch("  Alice ", " alice@example.com ").unwrap();
    assert_eq!(Value::Object(patch), json!({"name": "Alice", "email": "alice@example.com"}));
}

#[test]
fn details_patch_reports_bad_fields() {
    let errors = details_patch("A", "nope").unwrap_err();
    assert_eq!(errors.keys().copied().collect::<Vec<_>>(), ["email", "name"]);
}

#[test]
fn password_patch_carries_all_three_fields() {
    let patch = password_patch("oldsecret", "newsecret1", "newsecret1").unwrap();
    assert_eq!(
        Value::Object(patch),
        json!({"current_password": "oldsecret", "password": "newsecret1", "password_confirmation": "newsecret1"})
    );
}

#[test]
fn password_patch_requires_current_and_matching_confirmation() {
    let errors = password_patch("", "newsecret1", "newsecret2").unwrap_err();
    assert!(errors.contains_key("current_password"));
    assert!(errors.contains_key("password_confirmation"));
}
