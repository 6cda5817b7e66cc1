//! Root application component with routing and context providers.

use account::ServiceConfig;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::session_provider::SessionProvider;
use crate::net::browser;
use crate::pages::{
    index::LandingPage, login::LoginPage, settings::SettingsPage, signin::SignupPage, terminal::TerminalPage,
};
use crate::util::config::{META_KEY, META_URL};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The service endpoint and public key are written into the head so the
/// hydrated client reads the same values the server started with.
pub fn shell(options: LeptosOptions, config: ServiceConfig) -> impl IntoView {
    let url = config.url.clone();
    let key = config.anon_key.clone();
    provide_context(config);
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_URL content=url/>
                <meta name=META_KEY content=key/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the service client and sets up client-side routing. The session
/// provider sits inside the router so it can follow navigations.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ServiceConfig>().unwrap_or_else(crate::util::config::from_document);
    if config.is_placeholder() {
        log::warn!("service configuration missing; requests to the auth service will fail");
    }
    provide_context(browser::backend(config));

    view! {
        <Title text="APP"/>

        <Router>
            <SessionProvider>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signin") view=SignupPage/>
                    <Route path=StaticSegment("app") view=TerminalPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                </Routes>
            </SessionProvider>
        </Router>
    }
}
