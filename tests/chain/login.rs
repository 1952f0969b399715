use behavior_kit::chain::{login_chain, Credentials, LoginDecision, LoginRequest};
use std::sync::Arc;

fn credentials() -> Arc<Credentials> {
    Arc::new(
        Credentials::new()
            .with_user("user123", "password123")
            .with_user("admin", "hunter2"),
    )
}

fn rejection(request: &LoginRequest) -> (Option<&'static str>, String) {
    let outcome = login_chain(credentials()).dispatch(request).unwrap();
    let handler = outcome.handler();
    match outcome.into_output() {
        Some(LoginDecision::Rejected { reason }) => (handler, reason),
        other => panic!("Expected rejection, got {other:?}"),
    }
}

#[test]
fn test_valid_login_with_two_factor_is_granted() {
    let request =
        LoginRequest::new("user123", "password123").with_two_factor(Some("123456".to_string()));
    let outcome = login_chain(credentials()).dispatch(&request).unwrap();

    assert_eq!(outcome.handler(), Some("login_success"));
    assert_eq!(
        outcome.into_output(),
        Some(LoginDecision::Granted {
            username: "user123".to_string()
        })
    );
}

#[test]
fn test_valid_login_without_two_factor_is_granted() {
    let outcome = login_chain(credentials())
        .dispatch(&LoginRequest::new("admin", "hunter2"))
        .unwrap();
    assert!(outcome.output().unwrap().is_granted());
}

#[test]
fn test_empty_username_rejected_first() {
    let (handler, reason) = rejection(&LoginRequest::new("", ""));
    assert_eq!(handler, Some("check_username"));
    assert_eq!(reason, "username must not be empty");
}

#[test]
fn test_unknown_user_rejected() {
    let (handler, reason) = rejection(&LoginRequest::new("ghost", "password123"));
    assert_eq!(handler, Some("check_username"));
    assert_eq!(reason, "unknown user 'ghost'");
}

#[test]
fn test_password_checks() {
    let (handler, reason) = rejection(&LoginRequest::new("user123", ""));
    assert_eq!(handler, Some("check_password"));
    assert_eq!(reason, "password must not be empty");

    let (handler, reason) = rejection(&LoginRequest::new("user123", "wrong"));
    assert_eq!(handler, Some("check_password"));
    assert_eq!(reason, "incorrect password");
}

#[test]
fn test_two_factor_without_code_rejected() {
    let request = LoginRequest::new("user123", "password123").with_two_factor(None);
    let (handler, reason) = rejection(&request);
    assert_eq!(handler, Some("two_factor_auth"));
    assert_eq!(reason, "two-factor code required");
}
