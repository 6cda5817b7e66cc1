//! Settings page sections.
//!
//! DESIGN
//! ======
//! Sections are a closed enum so the page renders them with an exhaustive
//! `match`; adding a section fails to compile until it has a view.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsSection {
    #[default]
    Account,
    Password,
    Theme,
    Logout,
    Delete,
}

impl SettingsSection {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Password => "Password",
            Self::Theme => "Theme",
            Self::Logout => "Logout",
            Self::Delete => "Delete Account",
        }
    }

    /// Danger-zone sections get destructive styling.
    #[must_use]
    pub fn is_danger(self) -> bool {
        matches!(self, Self::Logout | Self::Delete)
    }
}

/// Sidebar groups, top to bottom.
pub const SIDEBAR: [(&str, &[SettingsSection]); 4] = [
    ("ACCOUNT SETTINGS", &[SettingsSection::Account]),
    ("SECURITY", &[SettingsSection::Password]),
    ("PREFERENCES", &[SettingsSection::Theme]),
    ("DANGER ZONE", &[SettingsSection::Logout, SettingsSection::Delete]),
];

pub const DELETE_UNAVAILABLE_NOTICE: &str = "Account deletion is not available yet.";
