//! Login page: email + password against the auth service.

use account::{AuthBackend, Route};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::browser::Backend;
use crate::state::session::{PageView, SessionState};
use crate::util::auth::install_session_guard;
use crate::util::task::TaskScope;

/// Login form. Visitors who already have a session are sent to `/app`
/// before the form is shown.
#[component]
pub fn LoginPage() -> impl IntoView {
    let backend = expect_context::<Backend>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let page = install_session_guard(Route::Login, session, navigate.clone());
    let scope = TaskScope::new();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(String::new());

        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let backend = backend.clone();
        let navigate = navigate.clone();
        scope.spawn(async move {
            match backend.sign_in(&email_value, &password_value).await {
                Ok(_) => navigate(Route::App.path(), NavigateOptions::default()),
                Err(err) => {
                    error.set(err.to_string());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <Show when=move || matches!(page.get(), PageView::Ready(_))>
            <div class="container">
                <h1>"Login"</h1>
                <form on:submit=on_submit.clone()>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <Show when=move || !error.get().is_empty()>
                        <p class="error">{move || error.get()}</p>
                    </Show>
                    <button type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="text-link">
                    "Don't have an account? "
                    <a href=Route::Signin.path()>"Sign up"</a>
                </p>
            </div>
        </Show>
    }
}
