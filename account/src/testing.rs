//! In-memory [`AuthBackend`] for flow tests.

use std::cell::RefCell;

use async_trait::async_trait;
use uuid::Uuid;

use crate::backend::AuthBackend;
use crate::error::AuthError;
use crate::profile::Profile;
use crate::session::{Session, SignUpOutcome, User};

pub const USER_ID: &str = "3f1c2b7e-9a7d-4c1e-8d2a-0c5b6f4e1a11";

pub fn user(email: &str) -> User {
    User {
        id: USER_ID.parse().unwrap(),
        email: Some(email.to_owned()),
        created_at: Some("2024-01-05T10:30:00Z".to_owned()),
    }
}

pub fn session(email: &str) -> Session {
    Session {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        token_type: "bearer".to_owned(),
        expires_at: i64::MAX,
        user: user(email),
    }
}

/// Records every call; answers from the configured fields.
pub struct FakeBackend {
    pub session: Option<Session>,
    /// Password accepted by `sign_in`; anything else is rejected.
    pub password: String,
    pub update_result: Result<(), AuthError>,
    pub sign_up_result: Result<SignUpOutcome, AuthError>,
    pub sign_ins: RefCell<Vec<(String, String)>>,
    pub sign_ups: RefCell<Vec<(String, String)>>,
    pub updates: RefCell<Vec<String>>,
}

impl FakeBackend {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            session: Some(session(email)),
            password: password.to_owned(),
            update_result: Ok(()),
            sign_up_result: Ok(SignUpOutcome::SignedIn(session(email))),
            sign_ins: RefCell::new(Vec::new()),
            sign_ups: RefCell::new(Vec::new()),
            updates: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl AuthBackend for FakeBackend {
    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        Ok(self.session.clone())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.sign_ins.borrow_mut().push((email.to_owned(), password.to_owned()));
        if password == self.password {
            Ok(session(email))
        } else {
            Err(AuthError::Rejected { status: 400, message: "Invalid login credentials".to_owned() })
        }
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, AuthError> {
        self.sign_ups.borrow_mut().push((email.to_owned(), password.to_owned()));
        self.sign_up_result.clone()
    }

    async fn sign_out(&self) {}

    async fn update_password(&self, new_password: &str) -> Result<User, AuthError> {
        self.updates.borrow_mut().push(new_password.to_owned());
        self.update_result.clone().map(|()| user("a@x.com"))
    }

    async fn fetch_profile(&self, _user_id: Uuid) -> Result<Option<Profile>, AuthError> {
        Ok(None)
    }
}
