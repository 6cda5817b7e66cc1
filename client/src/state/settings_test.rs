use super::*;

#[test]
fn account_is_default_section() {
    assert_eq!(SettingsSection::default(), SettingsSection::Account);
}

#[test]
fn sidebar_lists_every_section_once() {
    let listed: Vec<SettingsSection> = SIDEBAR.iter().flat_map(|(_, sections)| sections.iter().copied()).collect();
    assert_eq!(
        listed,
        vec![
            SettingsSection::Account,
            SettingsSection::Password,
            SettingsSection::Theme,
            SettingsSection::Logout,
            SettingsSection::Delete,
        ]
    );
}

#[test]
fn only_logout_and_delete_are_dangerous() {
    assert!(SettingsSection::Logout.is_danger());
    assert!(SettingsSection::Delete.is_danger());
    assert!(!SettingsSection::Account.is_danger());
    assert!(!SettingsSection::Theme.is_danger());
}

#[test]
fn delete_title_is_spelled_out() {
    assert_eq!(SettingsSection::Delete.title(), "Delete Account");
}
