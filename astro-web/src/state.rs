//! Application state managed via Dioxus context.
//!
//! The whole form session lives in one `Signal<Session>`. Network calls run in
//! spawned tasks; each takes a ticket from the session before the call and
//! hands it back afterwards, so late city lookups are dropped by the resolver.

use astro_core::api::HttpBackend;
use astro_core::birth::RequestPayload;
use astro_core::city::CityCandidate;
use astro_core::config::BackendConfig;
use astro_core::error::{ComputeError, LookupError};
use astro_core::prediction::PredictionResult;
use astro_core::service::{CityLookup, PredictionService};
use astro_session::Session;
use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, error};

const CLIENT_UNAVAILABLE: &str = "HTTP client unavailable";

/// Shared state for the forecast page.
#[derive(Clone, Copy)]
pub struct AppState {
    pub session: Signal<Session>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::new()),
        }
    }

    /// Record new city search text and, if long enough, look it up.
    pub fn search(mut self, backend: Backend, text: String) {
        let ticket = self.session.write().begin_search(text);
        if let Some(ticket) = ticket {
            spawn(async move {
                let outcome = backend.search(ticket.query()).await;
                self.session.write().complete_search(ticket, outcome);
            });
        }
    }

    /// Submit the form. Does nothing while a submission is in flight or the
    /// form is incomplete.
    pub fn submit(mut self, backend: Backend) {
        let ticket = self.session.write().begin_submit();
        match ticket {
            Ok(ticket) => {
                spawn(async move {
                    let outcome = backend.predict(ticket.payload()).await;
                    self.session.write().complete_submit(ticket, outcome);
                });
            }
            Err(e) => debug!("Submit ignored: {}", e),
        }
    }
}

/// HTTP backend provided through context. Empty if the client failed to build,
/// in which case every call fails like a network error would.
#[derive(Clone)]
pub struct Backend(Option<HttpBackend>);

impl Backend {
    pub fn connect() -> Self {
        match HttpBackend::new(backend_config()) {
            Ok(backend) => Self(Some(backend)),
            Err(e) => {
                error!("Failed to build HTTP client: {}", e);
                Self(None)
            }
        }
    }
}

impl CityLookup for Backend {
    async fn search(&self, query: &str) -> Result<Vec<CityCandidate>, LookupError> {
        match &self.0 {
            Some(backend) => backend.search(query).await,
            None => Err(LookupError::Transport(CLIENT_UNAVAILABLE.to_string())),
        }
    }
}

impl PredictionService for Backend {
    async fn predict(&self, payload: &RequestPayload) -> Result<PredictionResult, ComputeError> {
        match &self.0 {
            Some(backend) => backend.predict(payload).await,
            None => Err(ComputeError::Transport(CLIENT_UNAVAILABLE.to_string())),
        }
    }
}

/// Base URL baked in at build time via `ASTRO_BACKEND_URL`, else the page origin.
fn backend_config() -> BackendConfig {
    let base_url = option_env!("ASTRO_BACKEND_URL")
        .map(str::to_string)
        .unwrap_or_else(page_origin);
    BackendConfig::new(base_url)
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}
