use super::*;
use crate::error::AuthError;

#[test]
fn parse_known_plans() {
    assert_eq!(PlanType::parse("FREE"), PlanType::Free);
    assert_eq!(PlanType::parse("ACTIVE"), PlanType::Active);
}

#[test]
fn parse_keeps_unknown_plan_verbatim() {
    let plan = PlanType::parse("TRIAL");
    assert_eq!(plan, PlanType::Other("TRIAL".to_owned()));
    assert_eq!(plan.label(), "TRIAL");
    assert!(!plan.is_premium());
}

#[test]
fn missing_row_defaults_to_free() {
    let state = ProfileState::from_lookup::<AuthError>(Ok(None));
    assert_eq!(state, ProfileState::Loaded(PlanType::Free));
    assert_eq!(state.badge_label(), "FREE");
    assert_eq!(state.badge_class(), "free");
}

#[test]
fn active_row_renders_premium_badge() {
    let row: Profile = serde_json::from_value(serde_json::json!({ "user_type": "ACTIVE" })).unwrap();
    let state = ProfileState::from_lookup::<AuthError>(Ok(Some(row)));
    assert_eq!(state.badge_label(), "ACTIVE");
    assert_eq!(state.badge_class(), "premium");
}

#[test]
fn failed_read_is_unknown_not_free() {
    let state = ProfileState::from_lookup(Err(AuthError::Network("offline".to_owned())));
    assert_eq!(state, ProfileState::Unknown);
    assert_eq!(state.badge_label(), "UNKNOWN");
    assert_eq!(state.badge_class(), "unknown");
}

#[test]
fn loading_state_is_default() {
    assert_eq!(ProfileState::default(), ProfileState::Loading);
}
