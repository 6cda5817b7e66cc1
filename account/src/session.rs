//! Session and user records issued by the auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! A `Session` is exactly what gets persisted in browser storage, using the
//! same field names as the service's own client library so an existing
//! stored session keeps working.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use uuid::Uuid;

/// Refresh a stored session this many seconds before it actually expires.
pub const EXPIRY_MARGIN_SECS: i64 = 30;

/// Authenticated account as returned inside a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    /// RFC 3339 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    /// Creation date formatted like "January 5, 2024".
    ///
    /// Returns the raw value if it does not parse as RFC 3339, and `None` if
    /// the service sent no timestamp at all.
    #[must_use]
    pub fn member_since(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?;
        let formatted = OffsetDateTime::parse(raw, &Rfc3339)
            .ok()
            .and_then(|dt| dt.format(format_description!("[month repr:long] [day padding:none], [year]")).ok());
        Some(formatted.unwrap_or_else(|| raw.to_owned()))
    }
}

/// Token-bearing proof of authentication.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Unix timestamp (seconds) after which the access token is invalid.
    pub expires_at: i64,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

impl Session {
    /// `true` once the access token is within `margin` seconds of expiring.
    #[must_use]
    pub fn expires_within(&self, now: i64, margin: i64) -> bool {
        self.expires_at.saturating_sub(now) <= margin
    }
}

/// Body of a successful `/auth/v1/token` (or auto-confirmed signup) call.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    access_token: String,
    refresh_token: String,
    #[serde(default = "default_token_type")]
    token_type: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: User,
}

impl TokenResponse {
    /// Older service versions omit `expires_at`; derive it from `expires_in`.
    pub(crate) fn into_session(self, now: i64) -> Session {
        let expires_at = self
            .expires_at
            .unwrap_or_else(|| now.saturating_add(self.expires_in.unwrap_or(0)));
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            token_type: self.token_type,
            expires_at,
            user: self.user,
        }
    }
}

/// Result of asking "is there a current session?".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionLookup {
    Active(Session),
    Absent,
    /// The lookup itself failed; routing treats this like `Absent`.
    Failed(String),
}

impl SessionLookup {
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Active(session) => Some(session),
            Self::Absent | Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}

/// What a signup produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The service auto-confirmed the account and issued a session.
    SignedIn(Session),
    /// The account exists but must be confirmed by email first.
    ConfirmationRequired(User),
}
