//! The operations the portal needs from the external service.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AuthError;
use crate::profile::Profile;
use crate::session::{Session, SessionLookup, SignUpOutcome, User};

#[async_trait(?Send)]
pub trait AuthBackend {
    /// Current session, refreshed first if it is about to expire.
    async fn current_session(&self) -> Result<Option<Session>, AuthError>;

    /// Verify credentials and store the issued session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, AuthError>;

    /// End the session. Never fails from the caller's point of view.
    async fn sign_out(&self);

    async fn update_password(&self, new_password: &str) -> Result<User, AuthError>;

    /// Read the profile row for `user_id`; `Ok(None)` when no row exists.
    async fn fetch_profile(&self, user_id: Uuid) -> Result<Option<Profile>, AuthError>;
}

/// Ask the backend for the current session, folding errors into
/// [`SessionLookup::Failed`].
pub async fn lookup_session<B>(backend: &B) -> SessionLookup
where
    B: AuthBackend + ?Sized,
{
    match backend.current_session().await {
        Ok(Some(session)) => SessionLookup::Active(session),
        Ok(None) => SessionLookup::Absent,
        Err(err) => {
            log::warn!("session lookup failed: {err}");
            SessionLookup::Failed(err.to_string())
        }
    }
}
