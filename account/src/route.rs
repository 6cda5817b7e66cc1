//! Client routes and the per-page session guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! There are no router-level guards. Each page asks [`guard`] what to do once
//! the session lookup for the current navigation has finished.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::session::SessionLookup;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Index,
    Login,
    /// Account registration.
    Signin,
    /// The authenticated terminal view.
    App,
    Settings,
}

impl Route {
    pub const ALL: [Self; 5] = [Self::Index, Self::Login, Self::Signin, Self::App, Self::Settings];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Index => "/",
            Self::Login => "/login",
            Self::Signin => "/signin",
            Self::App => "/app",
            Self::Settings => "/settings",
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// Page content is only for signed-in users.
    #[must_use]
    pub fn requires_session(self) -> bool {
        matches!(self, Self::App | Self::Settings)
    }

    /// Credential forms make no sense once signed in.
    #[must_use]
    pub fn is_credential_form(self) -> bool {
        matches!(self, Self::Login | Self::Signin)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(Route),
}

/// Decide whether `route` renders for the given lookup result.
///
/// A failed lookup is routed like an absent session.
#[must_use]
pub fn guard(route: Route, lookup: &SessionLookup) -> GuardDecision {
    let signed_in = lookup.is_active();
    if route.requires_session() && !signed_in {
        GuardDecision::Redirect(Route::Login)
    } else if route.is_credential_form() && signed_in {
        GuardDecision::Redirect(Route::App)
    } else {
        GuardDecision::Render
    }
}
