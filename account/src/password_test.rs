use futures::executor::block_on;

use super::*;
use crate::testing::FakeBackend;

fn form(current: &str, new: &str, confirm: &str) -> PasswordChangeForm {
    PasswordChangeForm { current: current.to_owned(), new: new.to_owned(), confirm: confirm.to_owned() }
}

// =============================================================
// Validation order
// =============================================================

#[test]
fn missing_current_wins_over_everything() {
    assert_eq!(form("", "", "x").validate(), Err(PasswordRuleError::MissingCurrent));
}

#[test]
fn missing_new_checked_second() {
    assert_eq!(form("old-pass", "", "").validate(), Err(PasswordRuleError::MissingNew));
}

#[test]
fn short_new_checked_before_mismatch() {
    assert_eq!(form("old-pass", "abc", "xyz").validate(), Err(PasswordRuleError::TooShort));
}

#[test]
fn mismatch_checked_before_unchanged() {
    assert_eq!(form("abcdef", "abcdef", "abcdeg").validate(), Err(PasswordRuleError::Mismatch));
}

#[test]
fn unchanged_checked_last() {
    assert_eq!(form("abcdef", "abcdef", "abcdef").validate(), Err(PasswordRuleError::Unchanged));
}

#[test]
fn six_characters_is_long_enough() {
    assert_eq!(form("old-pass", "abcdef", "abcdef").validate(), Ok(()));
}

#[test]
fn length_counts_characters_not_bytes() {
    assert_eq!(form("old-pass", "ééééé", "ééééé").validate(), Err(PasswordRuleError::TooShort));
    assert_eq!(form("old-pass", "éééééé", "éééééé").validate(), Ok(()));
}

#[test]
fn rule_messages_are_user_facing() {
    assert_eq!(PasswordRuleError::MissingCurrent.to_string(), "Please enter your current password");
    assert_eq!(PasswordRuleError::MissingNew.to_string(), "Please enter a new password");
    assert_eq!(PasswordRuleError::TooShort.to_string(), "Password must be at least 6 characters");
    assert_eq!(PasswordRuleError::Mismatch.to_string(), "Passwords do not match");
    assert_eq!(
        PasswordRuleError::Unchanged.to_string(),
        "New password must be different from current password"
    );
}

// =============================================================
// change_password
// =============================================================

#[test]
fn invalid_form_makes_no_service_calls() {
    let backend = FakeBackend::new("a@x.com", "old-pass");
    let mut phases = Vec::new();

    let err = block_on(change_password(&backend, "a@x.com", &form("old-pass", "abc", "abc"), |p| phases.push(p)))
        .unwrap_err();

    assert_eq!(err.to_string(), "Password must be at least 6 characters");
    assert!(backend.sign_ins.borrow().is_empty());
    assert!(backend.updates.borrow().is_empty());
    assert_eq!(
        phases,
        vec![
            PasswordPhase::Validating,
            PasswordPhase::Failed("Password must be at least 6 characters".to_owned()),
        ]
    );
}

#[test]
fn wrong_current_password_reports_incorrect_and_skips_update() {
    let backend = FakeBackend::new("a@x.com", "right-pass");

    let err = block_on(change_password(&backend, "a@x.com", &form("wrong", "abcdef", "abcdef"), |_| {}))
        .unwrap_err();

    assert_eq!(err, PasswordChangeError::IncorrectCurrent);
    assert_eq!(err.to_string(), "Current password is incorrect");
    assert_eq!(*backend.sign_ins.borrow(), vec![("a@x.com".to_owned(), "wrong".to_owned())]);
    assert!(backend.updates.borrow().is_empty());
}

#[test]
fn successful_change_walks_every_phase() {
    let backend = FakeBackend::new("a@x.com", "old-pass");
    let mut phases = Vec::new();

    block_on(change_password(&backend, "a@x.com", &form("old-pass", "abcdef", "abcdef"), |p| phases.push(p)))
        .unwrap();

    assert_eq!(*backend.updates.borrow(), vec!["abcdef".to_owned()]);
    assert_eq!(
        phases,
        vec![
            PasswordPhase::Validating,
            PasswordPhase::Reauthenticating,
            PasswordPhase::Updating,
            PasswordPhase::Succeeded,
        ]
    );
}

#[test]
fn update_failure_surfaces_service_message() {
    let mut backend = FakeBackend::new("a@x.com", "old-pass");
    backend.update_result = Err(AuthError::Rejected { status: 422, message: "Password is too weak".to_owned() });

    let err = block_on(change_password(&backend, "a@x.com", &form("old-pass", "abcdef", "abcdef"), |_| {}))
        .unwrap_err();

    assert_eq!(err.to_string(), "Password is too weak");
}

#[test]
fn phase_in_flight_only_while_talking_to_service() {
    assert!(!PasswordPhase::Idle.in_flight());
    assert!(!PasswordPhase::Validating.in_flight());
    assert!(PasswordPhase::Reauthenticating.in_flight());
    assert!(PasswordPhase::Updating.in_flight());
    assert!(!PasswordPhase::Succeeded.in_flight());
    assert!(!PasswordPhase::Failed("x".to_owned()).in_flight());
}

#[test]
fn failed_phase_exposes_message() {
    assert_eq!(PasswordPhase::Failed("boom".to_owned()).error(), Some("boom"));
    assert_eq!(PasswordPhase::Succeeded.error(), None);
}

#[test]
fn success_keeps_form_locked_and_shows_notice() {
    assert!(PasswordPhase::Succeeded.locked());
    assert!(PasswordPhase::Updating.locked());
    assert!(!PasswordPhase::Idle.locked());
    assert!(!PasswordPhase::Failed("x".to_owned()).locked());
    assert_eq!(PasswordPhase::Succeeded.notice(), Some("Password changed successfully!"));
    assert_eq!(PasswordPhase::Idle.notice(), None);
}

// =============================================================
// Auto-close after success
// =============================================================

#[test]
fn success_clears_fields_then_closes_after_two_seconds() {
    let events = std::cell::RefCell::new(Vec::<String>::new());
    let events = &events;
    let mut fields = form("old-pass", "abcdef", "abcdef");

    block_on(close_after_success(
        || {
            fields = PasswordChangeForm::default();
            events.borrow_mut().push("clear".to_owned());
        },
        |ms| {
            events.borrow_mut().push(format!("sleep {ms}"));
            async move { events.borrow_mut().push("slept".to_owned()) }
        },
        |phase| events.borrow_mut().push(format!("{phase:?}")),
        || events.borrow_mut().push("close".to_owned()),
    ));

    assert_eq!(fields, PasswordChangeForm::default());
    assert_eq!(SUCCESS_CLOSE_DELAY_MS, 2_000);
    assert_eq!(*events.borrow(), vec!["clear", "sleep 2000", "slept", "Idle", "close"]);
}
