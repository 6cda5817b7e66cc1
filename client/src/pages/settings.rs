//! Settings page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded like `/app`. Once the session is known the page reads the plan
//! row once; a failed read shows an "unknown" badge rather than "free".

use account::{AuthBackend, ProfileState, Route, Session};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::password_modal::PasswordModal;
use crate::components::plan_badge::PlanBadge;
use crate::components::settings_sidebar::SettingsSidebar;
use crate::net::browser::Backend;
use crate::state::session::{PageView, SessionState};
use crate::state::settings::{DELETE_UNAVAILABLE_NOTICE, SettingsSection};
use crate::util::auth::{install_session_guard, sign_out_and_leave};
use crate::util::task::TaskScope;
use crate::util::theme::{self, ThemePreference};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let backend = expect_context::<Backend>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let page = install_session_guard(Route::Settings, session, navigate.clone());
    let scope = TaskScope::new();

    let profile = RwSignal::new(ProfileState::Loading);
    let active = RwSignal::new(SettingsSection::default());
    let show_password = RwSignal::new(false);
    let delete_notice = RwSignal::new(false);
    let theme_choice = RwSignal::new(theme::read_preference());

    let requested = StoredValue::new(false);
    {
        let backend = backend.clone();
        let scope = scope.clone();
        Effect::new(move || {
            let PageView::Ready(Some(current)) = page.get() else {
                return;
            };
            if requested.get_value() {
                return;
            }
            requested.set_value(true);
            let backend = backend.clone();
            scope.spawn(async move {
                let result = backend.fetch_profile(current.user.id).await;
                if let Err(err) = &result {
                    log::warn!("settings: profile lookup failed: {err}");
                }
                profile.set(ProfileState::from_lookup(result));
            });
        });
    }

    let on_logout = move || sign_out_and_leave(&scope, backend.clone(), navigate.clone());

    move || match page.get() {
        PageView::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
        PageView::Redirecting(_) | PageView::Ready(None) => ().into_any(),
        PageView::Ready(Some(session)) => {
            let email = session.user.email().to_owned();
            let on_logout = on_logout.clone();
            view! {
                <div class="settings-wrapper">
                    <div class="settings-container">
                        <SettingsSidebar active=active/>
                        <main class="settings-main">
                            {move || match active.get() {
                                SettingsSection::Account => account_section(&session, profile.read_only()),
                                SettingsSection::Password => password_section(show_password),
                                SettingsSection::Theme => theme_section(theme_choice),
                                SettingsSection::Logout => logout_section(on_logout.clone()),
                                SettingsSection::Delete => delete_section(delete_notice),
                            }}
                        </main>
                    </div>
                    <Show when=move || show_password.get()>
                        <PasswordModal
                            email=email.clone()
                            on_close=Callback::new(move |()| show_password.set(false))
                        />
                    </Show>
                </div>
            }
            .into_any()
        }
    }
}

fn section_header(section: SettingsSection, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="section-header">
            <h1>{section.title()}</h1>
            <p class="section-subtitle">{subtitle}</p>
        </div>
    }
}

fn account_section(session: &Session, profile: ReadSignal<ProfileState>) -> AnyView {
    let email = session.user.email().to_owned();
    let id = session.user.id.to_string();
    let member_since = session.user.member_since().unwrap_or_default();
    view! {
        {section_header(SettingsSection::Account, "Your account details")}
        <div class="settings-card">
            <div class="info-row">
                <span class="info-label">"Plan"</span>
                <PlanBadge profile=profile/>
            </div>
            <div class="info-row">
                <span class="info-label">"Email"</span>
                <span class="info-value">{email}</span>
            </div>
            <div class="info-row">
                <span class="info-label">"User ID"</span>
                <span class="info-value monospace">{id}</span>
            </div>
            <div class="info-row">
                <span class="info-label">"Member Since"</span>
                <span class="info-value">{member_since}</span>
            </div>
        </div>
    }
    .into_any()
}

fn password_section(show_password: RwSignal<bool>) -> AnyView {
    view! {
        {section_header(SettingsSection::Password, "Update the password you sign in with")}
        <div class="settings-card">
            <div class="setting-item">
                <div class="setting-info">
                    <h3>"Password"</h3>
                    <p>"Change your account password"</p>
                </div>
                <button class="action-button" on:click=move |_| show_password.set(true)>"Change"</button>
            </div>
        </div>
    }
    .into_any()
}

fn theme_section(choice: RwSignal<ThemePreference>) -> AnyView {
    let on_change = move |ev: leptos::ev::Event| {
        if let Some(preference) = ThemePreference::parse(&event_target_value(&ev)) {
            choice.set(preference);
            theme::select(preference);
        }
    };
    let options = ThemePreference::ALL
        .into_iter()
        .map(|preference| {
            view! {
                <option value=preference.label() selected=move || choice.get() == preference>
                    {preference.label()}
                </option>
            }
        })
        .collect::<Vec<_>>();
    view! {
        {section_header(SettingsSection::Theme, "Choose how the interface looks")}
        <div class="settings-card">
            <div class="setting-item">
                <div class="setting-info">
                    <h3>"Theme"</h3>
                    <p>"Light, dark, or follow the system"</p>
                </div>
                <select class="setting-select" on:change=on_change>
                    {options}
                </select>
            </div>
        </div>
    }
    .into_any()
}

fn logout_section<F>(on_logout: F) -> AnyView
where
    F: Fn() + Send + Sync + 'static,
{
    view! {
        {section_header(SettingsSection::Logout, "End your session on this device")}
        <div class="settings-card danger-card">
            <div class="setting-item">
                <div class="setting-info">
                    <h3>"Logout"</h3>
                    <p>"You will need to sign in again"</p>
                </div>
                <button class="action-button danger-button" on:click=move |_| on_logout()>"Logout"</button>
            </div>
        </div>
    }
    .into_any()
}

fn delete_section(notice: RwSignal<bool>) -> AnyView {
    view! {
        {section_header(SettingsSection::Delete, "Permanently remove your account")}
        <div class="settings-card danger-card">
            <div class="setting-item">
                <div class="setting-info">
                    <h3>"Delete Account"</h3>
                    <p>"This cannot be undone"</p>
                </div>
                <button class="action-button danger-button" on:click=move |_| notice.set(true)>"Delete"</button>
            </div>
            <Show when=move || notice.get()>
                <p class="notice">{DELETE_UNAVAILABLE_NOTICE}</p>
            </Show>
        </div>
    }
    .into_any()
}
