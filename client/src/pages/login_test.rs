use super::*;

#[test]
fn no_banner_before_warning_threshold() {
    assert_eq!(notice_text(LoginNotice::None), None);
}

#[test]
fn warning_counts_remaining_attempts() {
    assert_eq!(
        notice_text(LoginNotice::Warning { remaining: 2 }).as_deref(),
        Some("Multiple failed attempts. 2 attempts remaining before sign-in is blocked.")
    );
    assert_eq!(
        notice_text(LoginNotice::Warning { remaining: 1 }).as_deref(),
        Some("Multiple failed attempts. 1 attempt remaining before sign-in is blocked.")
    );
}

#[test]
fn blocked_banner() {
    assert!(notice_text(LoginNotice::Blocked).unwrap().contains("blocked"));
}
