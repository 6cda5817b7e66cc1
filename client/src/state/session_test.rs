use account::User;

use super::*;

fn session() -> Session {
    Session {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        token_type: "bearer".to_owned(),
        expires_at: i64::MAX,
        user: User {
            id: "3f1c2b7e-9a7d-4c1e-8d2a-0c5b6f4e1a11".parse().unwrap(),
            email: Some("a@x.com".to_owned()),
            created_at: None,
        },
    }
}

#[test]
fn default_state_is_loading_everywhere() {
    let state = SessionState::default();
    for route in Route::ALL {
        assert_eq!(page_view(route, &state), PageView::Loading);
    }
}

#[test]
fn pending_lookup_is_loading() {
    let state = SessionState::pending(Some(Route::App));
    assert_eq!(page_view(Route::App, &state), PageView::Loading);
}

#[test]
fn stale_lookup_from_another_route_is_ignored() {
    let state = SessionState::resolved(Some(Route::Login), SessionLookup::Absent);
    assert_eq!(page_view(Route::App, &state), PageView::Loading);
}

#[test]
fn protected_page_without_session_redirects_to_login() {
    let state = SessionState::resolved(Some(Route::Settings), SessionLookup::Absent);
    assert_eq!(page_view(Route::Settings, &state), PageView::Redirecting(Route::Login));
}

#[test]
fn login_with_session_redirects_to_app() {
    let state = SessionState::resolved(Some(Route::Login), SessionLookup::Active(session()));
    assert_eq!(page_view(Route::Login, &state), PageView::Redirecting(Route::App));
}

#[test]
fn protected_page_with_session_is_ready() {
    let state = SessionState::resolved(Some(Route::App), SessionLookup::Active(session()));
    assert_eq!(page_view(Route::App, &state), PageView::Ready(Some(session())));
}

#[test]
fn landing_page_ready_without_session() {
    let state = SessionState::resolved(Some(Route::Index), SessionLookup::Failed("offline".to_owned()));
    assert_eq!(page_view(Route::Index, &state), PageView::Ready(None));
}
