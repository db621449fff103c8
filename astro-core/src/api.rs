//! HTTP backend for both collaborators, built on `reqwest`.
//!
//! Compiles for native targets and for `wasm32` (where `reqwest` uses the
//! browser's fetch). One attempt per call; no retries.

use crate::birth::RequestPayload;
use crate::city::CityCandidate;
use crate::config::BackendConfig;
use crate::error::{ComputeError, LookupError};
use crate::prediction::PredictionResult;
use crate::service::{CityLookup, PredictionService};
use crate::wire::{self, CitySearchRequest, PredictionRequest};
use log::{debug, info};
use reqwest::Client;

const SEARCH_CITY_ROUTE: &str = "search-city";
const PREDICTION_ROUTE: &str = "get-prediction";

/// Client for the city lookup and prediction endpoints of one backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Result<Self, reqwest::Error> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }
}

impl From<reqwest::Error> for ComputeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ComputeError::Timeout
        } else {
            ComputeError::Transport(e.to_string())
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::Transport(e.to_string())
    }
}

impl CityLookup for HttpBackend {
    async fn search(&self, query: &str) -> Result<Vec<CityCandidate>, LookupError> {
        let url = self.config.endpoint(SEARCH_CITY_ROUTE);
        debug!("POST {} query={:?}", url, query);
        let response = self
            .client
            .post(&url)
            .json(&CitySearchRequest { query })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        wire::parse_candidates(&body)
    }
}

impl PredictionService for HttpBackend {
    async fn predict(&self, payload: &RequestPayload) -> Result<PredictionResult, ComputeError> {
        let url = self.config.endpoint(PREDICTION_ROUTE);
        let request = PredictionRequest::from(payload);
        info!(
            "POST {} for {} {}",
            url, request.birth_date, request.birth_time
        );
        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ComputeError::Rejected {
                status: status.as_u16(),
                detail: wire::error_detail(&body),
            });
        }
        wire::parse_prediction(&body)
    }
}
