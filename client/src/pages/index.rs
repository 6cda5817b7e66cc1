//! Landing page.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Navbar/>
        <div class="container landing">
            <h1>"APP"</h1>
            <p class="landing-tagline">"Your account, one terminal away."</p>
        </div>
    }
}
