//! Client for the hosted auth (`/auth/v1`) and database (`/rest/v1`) APIs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page reaches the service through this type. It owns the session
//! lifecycle on the client side: persisting what sign-in returns, refreshing
//! shortly before expiry, and clearing storage on sign-out or when a refresh
//! is refused.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`AuthError::Rejected`] carrying the service's
//! own message, extracted by [`error_message`]. Transport failures pass
//! through unchanged as [`AuthError::Network`].

#[cfg(test)]
#[path = "supabase_test.rs"]
mod supabase_test;

use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

use crate::backend::AuthBackend;
use crate::config::ServiceConfig;
use crate::error::AuthError;
use crate::http::{Clock, HttpRequest, HttpResponse, Method, SessionStore, Transport};
use crate::profile::{PLAN_COLUMN, PROFILE_TABLE, Profile};
use crate::session::{EXPIRY_MARGIN_SECS, Session, SignUpOutcome, TokenResponse, User};

const TOKEN_PATH: &str = "/auth/v1/token";
const SIGNUP_PATH: &str = "/auth/v1/signup";
const LOGOUT_PATH: &str = "/auth/v1/logout";
const USER_PATH: &str = "/auth/v1/user";

/// Pull a human-readable message out of an error body.
///
/// The auth API has used `msg`, `message`, `error_description` and `error`
/// across versions; the first non-empty one wins.
#[must_use]
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["msg", "message", "error_description", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()).filter(|msg| !msg.is_empty()))
                .map(str::to_owned)
        })
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

#[derive(Clone, Debug)]
pub struct SupabaseClient<T, S, C> {
    config: ServiceConfig,
    transport: T,
    store: S,
    clock: C,
}

impl<T, S, C> SupabaseClient<T, S, C> {
    pub fn new(config: ServiceConfig, transport: T, store: S, clock: C) -> Self {
        Self { config, transport, store, clock }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<T, S, C> SupabaseClient<T, S, C>
where
    T: Transport,
    S: SessionStore,
    C: Clock,
{
    fn request(&self, method: Method, path: &str) -> HttpRequest {
        HttpRequest::new(method, self.config.endpoint(path)).header("apikey", &self.config.anon_key)
    }

    /// Attach a bearer token, falling back to the public key.
    fn bearer(&self, request: HttpRequest, access_token: Option<&str>) -> HttpRequest {
        let token = access_token.unwrap_or(&self.config.anon_key);
        request.header("Authorization", &format!("Bearer {token}"))
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, AuthError> {
        let resp = self.transport.send(request).await?;
        if resp.ok() {
            Ok(resp)
        } else {
            Err(AuthError::Rejected { status: resp.status, message: error_message(resp.status, &resp.body) })
        }
    }

    async fn token_grant(&self, grant_type: &str, body: &serde_json::Value) -> Result<Session, AuthError> {
        let path = format!("{TOKEN_PATH}?grant_type={grant_type}");
        let request = self.bearer(self.request(Method::Post, &path), None).json(body);
        let resp = self.execute(request).await?;
        let token: TokenResponse = serde_json::from_str(&resp.body)?;
        let session = token.into_session(self.clock.now_secs());
        self.store.save(&session);
        Ok(session)
    }

    async fn refresh(&self, stored: &Session) -> Result<Session, AuthError> {
        self.token_grant("refresh_token", &json!({ "refresh_token": stored.refresh_token }))
            .await
    }
}

#[async_trait(?Send)]
impl<T, S, C> AuthBackend for SupabaseClient<T, S, C>
where
    T: Transport,
    S: SessionStore,
    C: Clock,
{
    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        let Some(stored) = self.store.load() else {
            return Ok(None);
        };
        if !stored.expires_within(self.clock.now_secs(), EXPIRY_MARGIN_SECS) {
            return Ok(Some(stored));
        }
        match self.refresh(&stored).await {
            Ok(session) => Ok(Some(session)),
            Err(err) if err.is_rejection() => {
                log::info!("stored session could not be refreshed, clearing it: {err}");
                self.store.clear();
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.token_grant("password", &json!({ "email": email, "password": password }))
            .await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, AuthError> {
        let request = self
            .bearer(self.request(Method::Post, SIGNUP_PATH), None)
            .json(&json!({ "email": email, "password": password }));
        let resp = self.execute(request).await?;
        let value: serde_json::Value = serde_json::from_str(&resp.body)?;
        if value.get("access_token").is_some() {
            let token: TokenResponse = serde_json::from_value(value)?;
            let session = token.into_session(self.clock.now_secs());
            self.store.save(&session);
            return Ok(SignUpOutcome::SignedIn(session));
        }
        // Unconfirmed accounts come back as a bare user, sometimes wrapped.
        let user_value = value.get("user").cloned().unwrap_or(value);
        let user: User = serde_json::from_value(user_value)?;
        Ok(SignUpOutcome::ConfirmationRequired(user))
    }

    async fn sign_out(&self) {
        if let Some(stored) = self.store.load() {
            let request = self.bearer(self.request(Method::Post, LOGOUT_PATH), Some(&stored.access_token));
            if let Err(err) = self.execute(request).await {
                log::warn!("remote sign-out failed: {err}");
            }
        }
        self.store.clear();
    }

    async fn update_password(&self, new_password: &str) -> Result<User, AuthError> {
        let session = self.current_session().await?.ok_or(AuthError::NoSession)?;
        let request = self
            .bearer(self.request(Method::Put, USER_PATH), Some(&session.access_token))
            .json(&json!({ "password": new_password }));
        let resp = self.execute(request).await?;
        let user: User = serde_json::from_str(&resp.body)?;
        let mut updated = session;
        updated.user = user.clone();
        self.store.save(&updated);
        Ok(user)
    }

    async fn fetch_profile(&self, user_id: Uuid) -> Result<Option<Profile>, AuthError> {
        let stored = self.store.load();
        let path = format!("/rest/v1/{PROFILE_TABLE}?select={PLAN_COLUMN}&id=eq.{user_id}");
        let request = self
            .bearer(self.request(Method::Get, &path), stored.as_ref().map(|s| s.access_token.as_str()))
            .header("Accept", "application/json");
        let resp = self.execute(request).await?;
        let mut rows: Vec<Profile> = serde_json::from_str(&resp.body)?;
        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            n => Err(AuthError::AmbiguousProfile(n)),
        }
    }
}
