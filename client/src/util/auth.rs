//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical guard and sign-out behavior.

use account::{AuthBackend, Route};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::browser::Backend;
use crate::state::session::{PageView, SessionState, page_view};
use crate::util::task::TaskScope;

/// Track what `route` should show and navigate away whenever the guard says so.
pub fn install_session_guard<F>(route: Route, session: RwSignal<SessionState>, navigate: F) -> Memo<PageView>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let view = Memo::new(move |_| session.with(|state| page_view(route, state)));
    Effect::new(move || {
        if let PageView::Redirecting(target) = view.get() {
            navigate(target.path(), NavigateOptions::default());
        }
    });
    view
}

/// Sign out, then go to the login page. Remote failures are only logged.
pub fn sign_out_and_leave<F>(scope: &TaskScope, backend: Backend, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    scope.spawn(async move {
        backend.sign_out().await;
        navigate(Route::Login.path(), NavigateOptions::default());
    });
}
