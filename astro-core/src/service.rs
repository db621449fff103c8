//! Seams to the two remote collaborators.
//!
//! The workflow only ever talks to these traits. `api::HttpBackend` implements
//! both over HTTP; tests substitute in-memory doubles.

// Futures are not required to be `Send`: the browser build drives them on a
// single-threaded executor.
#![allow(async_fn_in_trait)]

use crate::birth::RequestPayload;
use crate::city::CityCandidate;
use crate::error::{ComputeError, LookupError};
use crate::prediction::PredictionResult;

/// Resolves free text to ranked city candidates.
pub trait CityLookup {
    async fn search(&self, query: &str) -> Result<Vec<CityCandidate>, LookupError>;
}

/// Computes the chart and forecast for a validated payload.
pub trait PredictionService {
    async fn predict(&self, payload: &RequestPayload) -> Result<PredictionResult, ComputeError>;
}

impl<T: CityLookup + ?Sized> CityLookup for &T {
    async fn search(&self, query: &str) -> Result<Vec<CityCandidate>, LookupError> {
        (**self).search(query).await
    }
}

impl<T: PredictionService + ?Sized> PredictionService for &T {
    async fn predict(&self, payload: &RequestPayload) -> Result<PredictionResult, ComputeError> {
        (**self).predict(payload).await
    }
}
