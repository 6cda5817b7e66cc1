//! One session lookup per navigation, shared through context.

use account::Route;
use account::backend::lookup_session;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::net::browser::Backend;
use crate::state::session::SessionState;
use crate::util::task::{TaskHandle, TaskScope};

/// Provides `RwSignal<SessionState>` to everything below it.
///
/// Each pathname change aborts the previous lookup, marks the state pending
/// for the new route, and starts a fresh lookup.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let backend = expect_context::<Backend>();
    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    let location = use_location();
    let scope = TaskScope::new();
    let inflight = StoredValue::new(None::<TaskHandle>);

    Effect::new(move || {
        let route = Route::from_path(&location.pathname.get());
        if let Some(previous) = inflight.get_value() {
            previous.abort();
        }
        session.set(SessionState::pending(route));

        let backend = backend.clone();
        let handle = scope.spawn(async move {
            let lookup = lookup_session(&backend).await;
            session.set(SessionState::resolved(route, lookup));
        });
        inflight.set_value(Some(handle));
    });

    children()
}
