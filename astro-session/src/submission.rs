//! Submission lifecycle: Idle → Submitting → Succeeded | Failed.
//!
//! What is on screen is held in one [`Outcome`], so nothing, an error, and a
//! result can never be shown together.

use astro_core::birth::{BirthForm, RequestPayload};
use astro_core::error::{ComputeError, InputError};
use astro_core::prediction::PredictionResult;
use log::{debug, info, warn};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// What the result area currently presents.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Outcome {
    #[default]
    Empty,
    /// User-facing error message
    Failed(String),
    Ready(PredictionResult),
}

/// Why a submit action did not issue a request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitRejection {
    #[error("A prediction request is already in flight")]
    Busy,

    #[error(transparent)]
    Incomplete(#[from] InputError),
}

/// Handle for one in-flight submission, carrying its request payload.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTicket {
    seq: u64,
    payload: RequestPayload,
}

impl SubmitTicket {
    pub fn payload(&self) -> &RequestPayload {
        &self.payload
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionController {
    status: SubmissionStatus,
    outcome: Outcome,
    issued: u64,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the form and enter `Submitting`.
    ///
    /// On rejection nothing changes: no request is to be made and the current
    /// outcome stays on screen.
    pub fn begin(&mut self, form: &BirthForm) -> Result<SubmitTicket, SubmitRejection> {
        if self.status == SubmissionStatus::Submitting {
            debug!("Ignoring submit while a prediction is in flight");
            return Err(SubmitRejection::Busy);
        }
        let payload = RequestPayload::try_from_form(form).map_err(|e| {
            debug!("Form not ready for submission: {}", e);
            SubmitRejection::from(e)
        })?;

        self.issued += 1;
        self.status = SubmissionStatus::Submitting;
        self.outcome = Outcome::Empty;
        info!(
            "Submitting prediction #{} for {} {}",
            self.issued, payload.birth_date, payload.birth_time
        );
        Ok(SubmitTicket {
            seq: self.issued,
            payload,
        })
    }

    /// Record the collaborator's answer. Returns `false` if the ticket does not
    /// belong to the submission in flight.
    pub fn complete(
        &mut self,
        ticket: SubmitTicket,
        outcome: Result<PredictionResult, ComputeError>,
    ) -> bool {
        if self.status != SubmissionStatus::Submitting || ticket.seq != self.issued {
            warn!("Ignoring completion of unknown submission #{}", ticket.seq);
            return false;
        }
        match outcome {
            Ok(result) => {
                info!(
                    "Prediction #{} received: {} planets, {} periods",
                    ticket.seq,
                    result.planets.len(),
                    result.major_periods.len()
                );
                self.status = SubmissionStatus::Succeeded;
                self.outcome = Outcome::Ready(result);
            }
            Err(e) => {
                warn!("Prediction #{} failed: {}", ticket.seq, e);
                self.status = SubmissionStatus::Failed;
                self.outcome = Outcome::Failed(e.user_message());
            }
        }
        true
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match &self.outcome {
            Outcome::Ready(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Failed(message) => Some(message),
            _ => None,
        }
    }
}
