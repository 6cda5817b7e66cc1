//! Password change: local validation, reauthentication, update.
//!
//! DESIGN
//! ======
//! The flow is a small state machine:
//!
//! ```text
//! Idle -> Validating -> Reauthenticating -> Updating -> Succeeded
//!              |               |               |
//!              +---------------+---------------+----> Failed
//! ```
//!
//! [`change_password`] drives it against any [`AuthBackend`] and reports each
//! phase through a callback so the modal can disable inputs while a request
//! is in flight. [`close_after_success`] handles the auto-close that follows.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

use std::future::Future;

use crate::backend::AuthBackend;
use crate::error::AuthError;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Delay before a successful change closes the modal.
pub const SUCCESS_CLOSE_DELAY_MS: u32 = 2_000;

pub const SUCCESS_MESSAGE: &str = "Password changed successfully!";

/// The three fields of the change-password form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordChangeForm {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

/// Local rule violations, in the order they are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PasswordRuleError {
    #[error("Please enter your current password")]
    MissingCurrent,
    #[error("Please enter a new password")]
    MissingNew,
    #[error("Password must be at least 6 characters")]
    TooShort,
    #[error("Passwords do not match")]
    Mismatch,
    #[error("New password must be different from current password")]
    Unchanged,
}

/// Rules shared with signup: non-empty, minimum length, confirmation match.
pub fn check_new_password(new: &str, confirm: &str) -> Result<(), PasswordRuleError> {
    if new.is_empty() {
        return Err(PasswordRuleError::MissingNew);
    }
    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordRuleError::TooShort);
    }
    if new != confirm {
        return Err(PasswordRuleError::Mismatch);
    }
    Ok(())
}

impl PasswordChangeForm {
    /// Check every rule in order; the first violation wins.
    pub fn validate(&self) -> Result<(), PasswordRuleError> {
        if self.current.is_empty() {
            return Err(PasswordRuleError::MissingCurrent);
        }
        check_new_password(&self.new, &self.confirm)?;
        if self.current == self.new {
            return Err(PasswordRuleError::Unchanged);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PasswordChangeError {
    #[error(transparent)]
    Invalid(#[from] PasswordRuleError),
    /// Reauthentication failed, whatever the underlying reason.
    #[error("Current password is incorrect")]
    IncorrectCurrent,
    #[error(transparent)]
    Update(AuthError),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PasswordPhase {
    #[default]
    Idle,
    Validating,
    Reauthenticating,
    Updating,
    Succeeded,
    Failed(String),
}

impl PasswordPhase {
    /// A request to the service is outstanding.
    #[must_use]
    pub fn in_flight(&self) -> bool {
        matches!(self, Self::Reauthenticating | Self::Updating)
    }

    /// Inputs and submit stay disabled while a request is outstanding and
    /// through the success delay.
    #[must_use]
    pub fn locked(&self) -> bool {
        self.in_flight() || *self == Self::Succeeded
    }

    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        (*self == Self::Succeeded).then_some(SUCCESS_MESSAGE)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Validate `form`, re-verify the current password for `email`, then set the
/// new password. `on_phase` sees every transition, ending in `Succeeded` or
/// `Failed`.
pub async fn change_password<B, F>(
    backend: &B,
    email: &str,
    form: &PasswordChangeForm,
    mut on_phase: F,
) -> Result<(), PasswordChangeError>
where
    B: AuthBackend + ?Sized,
    F: FnMut(PasswordPhase),
{
    let result = run(backend, email, form, &mut on_phase).await;
    match &result {
        Ok(()) => on_phase(PasswordPhase::Succeeded),
        Err(err) => on_phase(PasswordPhase::Failed(err.to_string())),
    }
    result
}

async fn run<B, F>(backend: &B, email: &str, form: &PasswordChangeForm, on_phase: &mut F) -> Result<(), PasswordChangeError>
where
    B: AuthBackend + ?Sized,
    F: FnMut(PasswordPhase),
{
    on_phase(PasswordPhase::Validating);
    form.validate()?;

    on_phase(PasswordPhase::Reauthenticating);
    if let Err(err) = backend.sign_in(email, &form.current).await {
        log::info!("reauthentication before password change failed: {err}");
        return Err(PasswordChangeError::IncorrectCurrent);
    }

    on_phase(PasswordPhase::Updating);
    backend
        .update_password(&form.new)
        .await
        .map_err(PasswordChangeError::Update)?;
    Ok(())
}

/// Wind the form down after [`change_password`] succeeds: clear the fields,
/// wait [`SUCCESS_CLOSE_DELAY_MS`], go back to `Idle`, then close.
pub async fn close_after_success<Clear, Sleep, Delay, Phase, Close>(
    clear: Clear,
    sleep: Sleep,
    on_phase: Phase,
    close: Close,
) where
    Clear: FnOnce(),
    Sleep: FnOnce(u32) -> Delay,
    Delay: Future<Output = ()>,
    Phase: FnOnce(PasswordPhase),
    Close: FnOnce(),
{
    clear();
    sleep(SUCCESS_CLOSE_DELAY_MS).await;
    on_phase(PasswordPhase::Idle);
    close();
}
