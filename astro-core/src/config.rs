//! Backend address shared by both remote services.

use std::time::Duration;

pub const BASE_URL_ENV: &str = "ASTRO_BACKEND_URL";

/// Where the city lookup and prediction endpoints live.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BackendConfig {
    /// Scheme and host, e.g. `https://astro.example.com`. Empty means same origin.
    pub base_url: String,
    /// Request timeout; `None` keeps the transport default. Ignored on wasm.
    pub timeout: Option<Duration>,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Full URL of an API route, e.g. `endpoint("search-city")`.
    pub fn endpoint(&self, route: &str) -> String {
        format!(
            "{}/api/{}",
            self.base_url.trim_end_matches('/'),
            route.trim_start_matches('/')
        )
    }
}
