//! Settings navigation sidebar.

use account::Route;
use leptos::prelude::*;

use crate::state::settings::{SIDEBAR, SettingsSection};

#[component]
pub fn SettingsSidebar(active: RwSignal<SettingsSection>) -> impl IntoView {
    let groups = SIDEBAR
        .iter()
        .map(|(title, sections)| {
            let buttons = sections
                .iter()
                .copied()
                .map(|section| {
                    view! {
                        <button
                            class="nav-item"
                            class:active=move || active.get() == section
                            class:danger=section.is_danger()
                            on:click=move |_| active.set(section)
                        >
                            {section.title()}
                        </button>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <div class="nav-section">
                    <div class="nav-section-title">{*title}</div>
                    {buttons}
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <aside class="settings-sidebar">
            <div class="sidebar-header">
                <h2>"Settings"</h2>
            </div>
            <nav class="settings-nav">{groups}</nav>
            <div class="sidebar-footer">
                <a href=Route::App.path() class="back-link">"← Back to App"</a>
            </div>
        </aside>
    }
}
