//! Async driver pairing a [`Session`] with the two remote collaborators.
//!
//! The session sits behind a mutex that is only locked for the synchronous
//! `begin_*`/`complete_*` steps, never across a network await. Several
//! searches may therefore be outstanding at once (their completions are
//! ordered by ticket), and a second submit while one is in flight is refused
//! without touching the network.
//!
//! Every ticket handed out is completed exactly once. If the caller drops a
//! `search` or `submit` future mid-flight (a timeout, `select!`, an aborted
//! task), the ticket is completed as cancelled, so the session never stays
//! `Searching` or `Submitting`.

use crate::resolver::SearchTicket;
use crate::session::Session;
use crate::submission::{SubmitRejection, SubmitTicket};
use astro_core::birth::FormField;
use astro_core::error::{ComputeError, LookupError};
use astro_core::service::{CityLookup, PredictionService};
use log::debug;
use std::sync::{Mutex, MutexGuard, PoisonError};

fn lock(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Ticket that is in flight between `begin_*` and `complete_*`.
///
/// Dropping it unfinished completes the ticket through `cancel`.
struct InFlight<'a, T> {
    session: &'a Mutex<Session>,
    ticket: Option<T>,
    cancel: fn(&mut Session, T),
}

impl<'a, T> InFlight<'a, T> {
    fn new(session: &'a Mutex<Session>, ticket: T, cancel: fn(&mut Session, T)) -> Self {
        Self {
            session,
            ticket: Some(ticket),
            cancel,
        }
    }

    /// Complete the ticket with the collaborator's answer.
    fn finish<R>(mut self, complete: impl FnOnce(&mut Session, T) -> R) -> Option<R> {
        let ticket = self.ticket.take()?;
        Some(complete(&mut lock(self.session), ticket))
    }
}

impl<T> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            debug!("In-flight request dropped before completion");
            (self.cancel)(&mut lock(self.session), ticket);
        }
    }
}

fn cancel_search(session: &mut Session, ticket: SearchTicket) {
    session.complete_search(ticket, Err(LookupError::Cancelled));
}

fn cancel_submit(session: &mut Session, ticket: SubmitTicket) {
    session.complete_submit(ticket, Err(ComputeError::Cancelled));
}

pub struct Workflow<L, P> {
    session: Mutex<Session>,
    lookup: L,
    predictor: P,
}

impl<L, P> Workflow<L, P>
where
    L: CityLookup,
    P: PredictionService,
{
    pub fn new(lookup: L, predictor: P) -> Self {
        Self {
            session: Mutex::new(Session::new()),
            lookup,
            predictor,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        lock(&self.session)
    }

    /// Run `f` against the session while holding the lock.
    pub fn with_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(&mut self.lock())
    }

    /// Copy of the current state, for rendering.
    pub fn snapshot(&self) -> Session {
        self.lock().clone()
    }

    pub fn set_field(&self, field: FormField, value: impl Into<String>) {
        self.lock().set_field(field, value);
    }

    /// Handle a change of the city search text.
    ///
    /// Returns `true` if this call's lookup result was applied, `false` if no
    /// lookup was needed or a newer search superseded it.
    pub async fn search(&self, text: &str) -> bool {
        let Some(ticket) = self.lock().begin_search(text) else {
            return false;
        };
        let query = ticket.query().to_string();
        let pending = InFlight::new(&self.session, ticket, cancel_search);
        let outcome = self.lookup.search(&query).await;
        pending
            .finish(|session, ticket| session.complete_search(ticket, outcome))
            .unwrap_or(false)
    }

    /// Pick the candidate at `index`; `false` if there is none.
    pub fn select(&self, index: usize) -> bool {
        self.lock().select_index(index)
    }

    /// Validate, call the prediction service once, and record the outcome.
    ///
    /// `Err` means no request was made. `Ok` means the submission ran to
    /// completion; whether it succeeded is in the session's outcome.
    pub async fn submit(&self) -> Result<(), SubmitRejection> {
        let ticket = self.lock().begin_submit()?;
        let payload = *ticket.payload();
        let pending = InFlight::new(&self.session, ticket, cancel_submit);
        let outcome = self.predictor.predict(&payload).await;
        pending.finish(|session, ticket| session.complete_submit(ticket, outcome));
        Ok(())
    }
}
