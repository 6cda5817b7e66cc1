//! Session state for the current navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session provider performs one lookup per navigation and stores the
//! result here, tagged with the route it was made for. Pages and the navbar
//! only trust a result tagged with their own route, so a lookup left over
//! from the previous page can never drive a redirect.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use account::route::guard;
use account::{GuardDecision, Route, Session, SessionLookup};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Route the lookup belongs to; `None` for unknown paths.
    pub route: Option<Route>,
    /// `None` while the lookup is in flight.
    pub lookup: Option<SessionLookup>,
}

impl SessionState {
    #[must_use]
    pub fn pending(route: Option<Route>) -> Self {
        Self { route, lookup: None }
    }

    #[must_use]
    pub fn resolved(route: Option<Route>, lookup: SessionLookup) -> Self {
        Self { route, lookup: Some(lookup) }
    }

    /// The finished lookup, if it was made for `route`.
    #[must_use]
    pub fn resolved_for(&self, route: Route) -> Option<&SessionLookup> {
        if self.route == Some(route) { self.lookup.as_ref() } else { None }
    }
}

/// What a page should show right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageView {
    Loading,
    Redirecting(Route),
    /// Render the page; carries the session when there is one.
    Ready(Option<Session>),
}

#[must_use]
pub fn page_view(route: Route, state: &SessionState) -> PageView {
    let Some(lookup) = state.resolved_for(route) else {
        return PageView::Loading;
    };
    match guard(route, lookup) {
        GuardDecision::Redirect(target) => PageView::Redirecting(target),
        GuardDecision::Render => PageView::Ready(lookup.session().cloned()),
    }
}
