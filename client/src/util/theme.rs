//! Display theme preference.
//!
//! Reads the user's preference from `localStorage` and applies the
//! `.dark-mode` class to the `<html>` element. `Auto` follows the system's
//! `prefers-color-scheme`. Requires a browser environment; elsewhere every
//! function is a no-op returning defaults.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage;

const STORAGE_KEY: &str = "portal_theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    Auto,
}

impl ThemePreference {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::Auto];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Auto => "Auto",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pref| pref.label().eq_ignore_ascii_case(raw))
    }

    /// Whether dark styling applies, given the system preference.
    #[must_use]
    pub fn is_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::Auto => system_prefers_dark,
        }
    }
}

/// Read the stored preference, defaulting to `Light`.
pub fn read_preference() -> ThemePreference {
    storage::load_raw(STORAGE_KEY)
        .and_then(|raw| ThemePreference::parse(&raw))
        .unwrap_or_default()
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(preference: ThemePreference) {
    let dark = preference.is_dark(system_prefers_dark());
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let class_list = el.class_list();
            let _ = if dark { class_list.add_1("dark-mode") } else { class_list.remove_1("dark-mode") };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Persist and apply a new preference.
pub fn select(preference: ThemePreference) {
    storage::save_raw(STORAGE_KEY, preference.label());
    apply(preference);
}
