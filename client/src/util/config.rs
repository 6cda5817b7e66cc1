//! Service configuration as seen by the hydrated client.
//!
//! The server writes both values into `<meta>` tags of the shell; this reads
//! them back with the same placeholder fallback the server applies.

use account::ServiceConfig;
use account::config::{KEY_VAR, URL_VAR};

pub const META_URL: &str = "service-url";
pub const META_KEY: &str = "service-key";

/// Map a configuration variable to the meta tag that carries it.
#[must_use]
pub fn meta_name(var: &str) -> Option<&'static str> {
    match var {
        URL_VAR => Some(META_URL),
        KEY_VAR => Some(META_KEY),
        _ => None,
    }
}

/// Read the service configuration from the current document.
pub fn from_document() -> ServiceConfig {
    ServiceConfig::from_lookup(|var| meta_name(var).and_then(read_meta))
}

fn read_meta(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{name}\"]");
        document
            .query_selector(&selector)
            .ok()
            .flatten()?
            .get_attribute("content")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_names_cover_both_variables() {
        assert_eq!(meta_name(URL_VAR), Some(META_URL));
        assert_eq!(meta_name(KEY_VAR), Some(META_KEY));
        assert_eq!(meta_name("PORT"), None);
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn document_config_is_placeholder_outside_browser() {
        assert_eq!(from_document(), ServiceConfig::default());
    }
}
