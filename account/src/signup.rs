//! Account registration.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::backend::AuthBackend;
use crate::error::AuthError;
use crate::password::{PasswordRuleError, check_new_password};
use crate::session::SignUpOutcome;

pub const CONFIRM_EMAIL_NOTICE: &str = "Check your email to confirm your account";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub confirm: String,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignUpError {
    #[error("Please enter your email")]
    MissingEmail,
    #[error(transparent)]
    Password(#[from] PasswordRuleError),
    #[error(transparent)]
    Service(#[from] AuthError),
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), SignUpError> {
        if self.email.trim().is_empty() {
            return Err(SignUpError::MissingEmail);
        }
        check_new_password(&self.password, &self.confirm)?;
        Ok(())
    }
}

/// Validate `form` and register it with the service.
pub async fn sign_up<B>(backend: &B, form: &SignUpForm) -> Result<SignUpOutcome, SignUpError>
where
    B: AuthBackend + ?Sized,
{
    form.validate()?;
    let outcome = backend.sign_up(form.email.trim(), &form.password).await?;
    Ok(outcome)
}
