//! Change-password modal.
//!
//! Drives `account::password::change_password` and mirrors its phases. Inputs
//! are locked while a request is in flight and through the success delay;
//! dismissal only while a request is in flight.

use account::password::{PasswordChangeForm, PasswordPhase, change_password, close_after_success};
use leptos::prelude::*;

use crate::net::browser::Backend;
use crate::util::task::{TaskScope, sleep_ms};

#[component]
pub fn PasswordModal(
    /// Email of the signed-in account, used to re-verify the current password.
    email: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let backend = expect_context::<Backend>();
    let scope = TaskScope::new();

    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let phase = RwSignal::new(PasswordPhase::Idle);

    let busy = move || phase.with(PasswordPhase::locked);
    let dismiss = move || {
        if !phase.with_untracked(PasswordPhase::in_flight) {
            on_close.run(());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if phase.with_untracked(PasswordPhase::locked) {
            return;
        }
        let form = PasswordChangeForm {
            current: current.get_untracked(),
            new: new.get_untracked(),
            confirm: confirm.get_untracked(),
        };
        let backend = backend.clone();
        let email = email.clone();
        scope.spawn(async move {
            let result = change_password(&backend, &email, &form, |next| phase.set(next)).await;
            if result.is_ok() {
                close_after_success(
                    || {
                        current.set(String::new());
                        new.set(String::new());
                        confirm.set(String::new());
                    },
                    sleep_ms,
                    |next| phase.set(next),
                    || on_close.run(()),
                )
                .await;
            }
        });
    };

    let field = move |id: &'static str, label: &'static str, placeholder: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    id=id
                    type="password"
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    disabled=busy
                />
            </div>
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| dismiss()>
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>"Change Password"</h3>
                    <button class="modal-close" on:click=move |_| dismiss()>"×"</button>
                </div>
                <form class="modal-form" on:submit=on_submit>
                    {field("currentPassword", "Current Password", "Enter current password", current)}
                    {field("newPassword", "New Password", "Enter new password", new)}
                    {field("confirmPassword", "Confirm Password", "Confirm password", confirm)}
                    <Show when=move || phase.with(|p| p.error().is_some())>
                        <div class="error-message">
                            {move || phase.with(|p| p.error().unwrap_or_default().to_owned())}
                        </div>
                    </Show>
                    <Show when=move || phase.with(|p| p.notice().is_some())>
                        <div class="success-message">{move || phase.with(|p| p.notice().unwrap_or_default())}</div>
                    </Show>
                    <div class="modal-actions">
                        <button
                            type="button"
                            class="modal-button cancel-button"
                            on:click=move |_| dismiss()
                            disabled=busy
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="modal-button submit-button" disabled=busy>
                            {move || if phase.with(PasswordPhase::in_flight) { "Changing..." } else { "Change Password" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
