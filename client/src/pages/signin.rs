//! Signup page (served at `/signin`).

use account::Route;
use account::SignUpOutcome;
use account::signup::{CONFIRM_EMAIL_NOTICE, SignUpForm, sign_up};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::browser::Backend;
use crate::state::session::{PageView, SessionState};
use crate::util::auth::install_session_guard;
use crate::util::task::TaskScope;

#[component]
pub fn SignupPage() -> impl IntoView {
    let backend = expect_context::<Backend>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let page = install_session_guard(Route::Signin, session, navigate.clone());
    let scope = TaskScope::new();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        notice.set(String::new());

        let form = SignUpForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm: confirm.get_untracked(),
        };
        if let Err(err) = form.validate() {
            error.set(err.to_string());
            return;
        }
        busy.set(true);

        let backend = backend.clone();
        let navigate = navigate.clone();
        scope.spawn(async move {
            match sign_up(&backend, &form).await {
                Ok(SignUpOutcome::SignedIn(_)) => navigate(Route::App.path(), NavigateOptions::default()),
                Ok(SignUpOutcome::ConfirmationRequired(_)) => {
                    notice.set(CONFIRM_EMAIL_NOTICE.to_owned());
                    password.set(String::new());
                    confirm.set(String::new());
                    busy.set(false);
                }
                Err(err) => {
                    error.set(err.to_string());
                    busy.set(false);
                }
            }
        });
    };

    let field = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    id=id
                    type=kind
                    required
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <Show when=move || matches!(page.get(), PageView::Ready(_))>
            <div class="container">
                <h1>"Sign up"</h1>
                <form on:submit=on_submit.clone()>
                    {field("email", "Email", "email", email)}
                    {field("password", "Password", "password", password)}
                    {field("confirmPassword", "Confirm Password", "password", confirm)}
                    <Show when=move || !error.get().is_empty()>
                        <p class="error">{move || error.get()}</p>
                    </Show>
                    <Show when=move || !notice.get().is_empty()>
                        <p class="notice">{move || notice.get()}</p>
                    </Show>
                    <button type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing up..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="text-link">
                    "Already have an account? "
                    <a href=Route::Login.path()>"Login"</a>
                </p>
            </div>
        </Show>
    }
}
