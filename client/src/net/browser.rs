//! `fetch` transport, `localStorage` session store, and wall clock.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use account::http::{Clock, HttpRequest, HttpResponse, SessionStore, Transport};
use account::{AuthError, Session, ServiceConfig, SupabaseClient};
use async_trait::async_trait;

use crate::util::storage;

/// The service client as used by every page.
pub type Backend = SupabaseClient<FetchTransport, BrowserSessionStore, BrowserClock>;

/// Build the page-wide service client for `config`.
pub fn backend(config: ServiceConfig) -> Backend {
    let store = BrowserSessionStore { key: config.storage_key() };
    SupabaseClient::new(config, FetchTransport, store, BrowserClock)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            use account::http::Method;
            use gloo_net::http::Request;

            let network = |e: gloo_net::Error| AuthError::Network(e.to_string());

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let req = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(network)?;
            let resp = req.send().await.map_err(network)?;
            let status = resp.status();
            let body = resp.text().await.map_err(network)?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(AuthError::Unavailable)
        }
    }
}

/// Session persisted as JSON under the service's storage key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserSessionStore {
    pub key: String,
}

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<Session> {
        storage::load_json(&self.key)
    }

    fn save(&self, session: &Session) {
        storage::save_json(&self.key, session);
    }

    fn clear(&self) {
        storage::remove(&self.key);
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_secs(&self) -> i64 {
        #[cfg(feature = "hydrate")]
        {
            (js_sys::Date::now() / 1000.0) as i64
        }
        #[cfg(not(feature = "hydrate"))]
        {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
        }
    }
}
