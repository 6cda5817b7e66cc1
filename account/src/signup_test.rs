use futures::executor::block_on;

use super::*;
use crate::testing::{FakeBackend, user};

fn form(email: &str, password: &str, confirm: &str) -> SignUpForm {
    SignUpForm { email: email.to_owned(), password: password.to_owned(), confirm: confirm.to_owned() }
}

#[test]
fn blank_email_rejected_first() {
    assert_eq!(form("   ", "", "").validate(), Err(SignUpError::MissingEmail));
    assert_eq!(SignUpError::MissingEmail.to_string(), "Please enter your email");
}

#[test]
fn password_rules_follow_email() {
    assert_eq!(form("a@x.com", "", "").validate(), Err(SignUpError::Password(PasswordRuleError::MissingNew)));
    assert_eq!(
        form("a@x.com", "abc", "abc").validate(),
        Err(SignUpError::Password(PasswordRuleError::TooShort))
    );
    assert_eq!(
        form("a@x.com", "abcdef", "abcdeg").validate(),
        Err(SignUpError::Password(PasswordRuleError::Mismatch))
    );
}

#[test]
fn valid_form_is_sent_with_trimmed_email() {
    let backend = FakeBackend::new("a@x.com", "unused");

    let outcome = block_on(sign_up(&backend, &form("  a@x.com ", "abcdef", "abcdef"))).unwrap();

    assert!(matches!(outcome, SignUpOutcome::SignedIn(_)));
    assert_eq!(*backend.sign_ups.borrow(), vec![("a@x.com".to_owned(), "abcdef".to_owned())]);
}

#[test]
fn invalid_form_is_not_sent() {
    let backend = FakeBackend::new("a@x.com", "unused");
    let _ = block_on(sign_up(&backend, &form("a@x.com", "abc", "abc")));
    assert!(backend.sign_ups.borrow().is_empty());
}

#[test]
fn confirmation_outcome_passes_through() {
    let mut backend = FakeBackend::new("a@x.com", "unused");
    backend.sign_up_result = Ok(SignUpOutcome::ConfirmationRequired(user("a@x.com")));

    let outcome = block_on(sign_up(&backend, &form("a@x.com", "abcdef", "abcdef"))).unwrap();

    assert!(matches!(outcome, SignUpOutcome::ConfirmationRequired(_)));
}

#[test]
fn service_message_shown_verbatim() {
    let mut backend = FakeBackend::new("a@x.com", "unused");
    backend.sign_up_result =
        Err(AuthError::Rejected { status: 422, message: "User already registered".to_owned() });

    let err = block_on(sign_up(&backend, &form("a@x.com", "abcdef", "abcdef"))).unwrap_err();

    assert_eq!(err.to_string(), "User already registered");
}
