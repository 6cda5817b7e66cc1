use super::*;

#[test]
fn parse_accepts_labels_case_insensitively() {
    assert_eq!(ThemePreference::parse("Dark"), Some(ThemePreference::Dark));
    assert_eq!(ThemePreference::parse("auto"), Some(ThemePreference::Auto));
    assert_eq!(ThemePreference::parse("sepia"), None);
}

#[test]
fn auto_follows_system() {
    assert!(ThemePreference::Auto.is_dark(true));
    assert!(!ThemePreference::Auto.is_dark(false));
    assert!(ThemePreference::Dark.is_dark(false));
    assert!(!ThemePreference::Light.is_dark(true));
}

#[test]
fn labels_round_trip_through_parse() {
    for pref in ThemePreference::ALL {
        assert_eq!(ThemePreference::parse(pref.label()), Some(pref));
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_defaults_to_light_in_non_hydrate_tests() {
    assert_eq!(read_preference(), ThemePreference::Light);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn apply_and_select_are_noops_but_callable() {
    apply(ThemePreference::Dark);
    select(ThemePreference::Auto);
}
