//! Top navigation bar with a session-aware entry button.

use account::Route;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionState;

/// Brand plus a "Terminal" button when signed in, "Login" otherwise.
/// Renders nothing until the current navigation's lookup has finished.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();

    let signed_in = Memo::new(move |_| {
        let route = Route::from_path(&location.pathname.get())?;
        session.with(|state| state.resolved_for(route).map(account::SessionLookup::is_active))
    });

    let on_click = move |_| {
        let target = if signed_in.get_untracked() == Some(true) { Route::App } else { Route::Login };
        navigate(target.path(), NavigateOptions::default());
    };

    view! {
        <Show when=move || signed_in.get().is_some()>
            <nav class="navbar">
                <div class="navbar-container">
                    <div class="navbar-brand">"APP"</div>
                    <button class="navbar-button" on:click=on_click.clone()>
                        {move || if signed_in.get() == Some(true) { "Terminal" } else { "Login" }}
                    </button>
                </div>
            </nav>
        </Show>
    }
}
