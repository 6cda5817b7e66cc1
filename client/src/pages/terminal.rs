//! Terminal page: the authenticated home at `/app`.

use account::Route;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::browser::Backend;
use crate::state::session::{PageView, SessionState};
use crate::util::auth::{install_session_guard, sign_out_and_leave};
use crate::util::task::TaskScope;

#[component]
pub fn TerminalPage() -> impl IntoView {
    let backend = expect_context::<Backend>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let page = install_session_guard(Route::App, session, navigate.clone());
    let scope = TaskScope::new();

    let on_logout = move |_| sign_out_and_leave(&scope, backend.clone(), navigate.clone());

    move || match page.get() {
        PageView::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
        PageView::Redirecting(_) | PageView::Ready(None) => ().into_any(),
        PageView::Ready(Some(session)) => {
            let email = session.user.email().to_owned();
            view! {
                <div class="container container-wide">
                    <h1>"Terminal"</h1>
                    <div class="user-info">
                        <p>
                            <strong>"Account Email:"</strong>
                            " "
                            {email}
                        </p>
                    </div>
                    <div class="terminal-actions">
                        <a class="button secondary-button" href=Route::Settings.path()>"Settings"</a>
                        <button class="logout-button" on:click=on_logout.clone()>"Logout"</button>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
