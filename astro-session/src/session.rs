//! The single state aggregate for one form session.
//!
//! `Session` owns the form, the search text, the resolver and the submission
//! controller. Asynchronous work is split into `begin_*` (synchronous, hands
//! out a ticket) and `complete_*` (synchronous, consumes it) so the network
//! call itself runs without holding any borrow of the session.

use crate::resolver::{CityResolver, ResolverStatus, SearchTicket};
use crate::selection::bind_candidate;
use crate::submission::{
    Outcome, SubmissionController, SubmissionStatus, SubmitRejection, SubmitTicket,
};
use astro_core::birth::{BirthForm, FormField};
use astro_core::city::CityCandidate;
use astro_core::error::{ComputeError, LookupError};
use astro_core::prediction::PredictionResult;

#[derive(Debug, Clone, Default)]
pub struct Session {
    form: BirthForm,
    search_text: String,
    resolver: CityResolver,
    submission: SubmissionController,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // form fields

    pub fn field(&self, field: FormField) -> &str {
        self.form.get(field)
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn form(&self) -> &BirthForm {
        &self.form
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    // city search

    /// Record new search text and start a lookup for it if it is long enough.
    pub fn begin_search(&mut self, text: impl Into<String>) -> Option<SearchTicket> {
        self.search_text = text.into();
        self.resolver.begin(&self.search_text)
    }

    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<CityCandidate>, LookupError>,
    ) -> bool {
        self.resolver.complete(ticket, outcome)
    }

    pub fn candidates(&self) -> &[CityCandidate] {
        self.resolver.candidates()
    }

    pub fn resolver_status(&self) -> ResolverStatus {
        self.resolver.status()
    }

    pub fn is_searching(&self) -> bool {
        self.resolver.is_searching()
    }

    // selection

    pub fn select(&mut self, candidate: &CityCandidate) {
        bind_candidate(
            &mut self.form,
            &mut self.search_text,
            &mut self.resolver,
            candidate,
        );
    }

    /// Select the candidate at `index` in the current list. Returns `false`
    /// (and changes nothing) when there is no such candidate.
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.resolver.candidate(index).cloned() {
            Some(candidate) => {
                self.select(&candidate);
                true
            }
            None => false,
        }
    }

    // submission

    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SubmitRejection> {
        self.submission.begin(&self.form)
    }

    pub fn complete_submit(
        &mut self,
        ticket: SubmitTicket,
        outcome: Result<PredictionResult, ComputeError>,
    ) -> bool {
        self.submission.complete(ticket, outcome)
    }

    pub fn submission_status(&self) -> SubmissionStatus {
        self.submission.status()
    }

    pub fn is_loading(&self) -> bool {
        self.submission.is_loading()
    }

    pub fn can_submit(&self) -> bool {
        self.submission.can_submit()
    }

    pub fn outcome(&self) -> &Outcome {
        self.submission.outcome()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.submission.result()
    }

    pub fn error(&self) -> Option<&str> {
        self.submission.error()
    }
}
