//! Service endpoint configuration.
//!
//! Two values locate the external service: its base URL and its public
//! (anonymous) key. Both fall back to a literal placeholder so the app still
//! boots without them; every request then fails and the failure is surfaced
//! like any other service error.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const KEY_VAR: &str = "SUPABASE_ANON_KEY";
pub const PLACEHOLDER: &str = "x";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub url: String,
    pub anon_key: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { url: PLACEHOLDER.to_owned(), anon_key: PLACEHOLDER.to_owned() }
    }
}

impl ServiceConfig {
    /// Build config from an arbitrary key lookup (environment, meta tags).
    ///
    /// Missing or blank values become [`PLACEHOLDER`]. A trailing `/` on the
    /// URL is dropped so endpoint paths can be appended directly.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| PLACEHOLDER.to_owned())
        };
        let url = read(URL_VAR).trim_end_matches('/').to_owned();
        let url = if url.is_empty() { PLACEHOLDER.to_owned() } else { url };
        Self { url, anon_key: read(KEY_VAR) }
    }

    /// Read [`URL_VAR`] and [`KEY_VAR`] from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `true` if either value is still the placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.url == PLACEHOLDER || self.anon_key == PLACEHOLDER
    }

    /// Project reference: first DNS label of the service host.
    #[must_use]
    pub fn project_ref(&self) -> &str {
        let rest = self.url.split_once("://").map_or(self.url.as_str(), |(_, rest)| rest);
        let host = rest.split(['/', ':']).next().unwrap_or(rest);
        host.split('.').next().unwrap_or(host)
    }

    /// `localStorage` key holding the persisted session.
    #[must_use]
    pub fn storage_key(&self) -> String {
        format!("sb-{}-auth-token", self.project_ref())
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.url)
    }
}
