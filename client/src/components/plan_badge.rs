use account::ProfileState;
use leptos::prelude::*;

/// Plan badge: "premium" styling for active plans, "free" for the rest,
/// "unknown" while loading or when the profile could not be read.
#[component]
pub fn PlanBadge(profile: ReadSignal<ProfileState>) -> impl IntoView {
    view! {
        <div class=move || format!("plan-badge {}", profile.with(ProfileState::badge_class))>
            {move || profile.with(|p| p.badge_label().to_owned())}
        </div>
    }
}
