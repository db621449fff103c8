/// Error types for the astro forecast workflow
use thiserror::Error;

/// Message shown when the computation service fails without a usable `detail`.
pub const FALLBACK_PREDICTION_ERROR: &str = "Произошла ошибка при получении прогноза";

/// Failure of the city lookup collaborator.
///
/// Never shown to the user: the resolver degrades to an empty list.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    /// Request never completed (connection, DNS, timeout)
    #[error("City lookup request failed: {0}")]
    Transport(String),

    /// Service answered with a non-success status
    #[error("City lookup returned status {0}")]
    Status(u16),

    /// Body did not match the candidate schema
    #[error("Malformed city lookup response: {0}")]
    Malformed(String),

    /// Caller stopped waiting before the lookup answered
    #[error("City lookup was cancelled")]
    Cancelled,
}

/// Failure of the prediction computation collaborator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputeError {
    /// Request never completed
    #[error("Prediction request failed: {0}")]
    Transport(String),

    /// Transport gave up waiting
    #[error("Prediction request timed out")]
    Timeout,

    /// Service answered with a non-success status
    #[error("Prediction service returned status {status}")]
    Rejected {
        status: u16,
        /// `detail` field of the error body, when it was a string
        detail: Option<String>,
    },

    /// Body did not match the prediction schema
    #[error("Malformed prediction response: {0}")]
    Malformed(String),

    /// Caller stopped waiting before the service answered
    #[error("Prediction request was cancelled")]
    Cancelled,
}

impl ComputeError {
    /// Text to surface to the user: the service's own message if it sent one,
    /// otherwise the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ComputeError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => FALLBACK_PREDICTION_ERROR.to_string(),
        }
    }
}

/// Reason a form cannot be turned into a request payload.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Birth date is required")]
    MissingBirthDate,

    #[error("Birth date must be YYYY-MM-DD, got {0:?}")]
    InvalidBirthDate(String),

    #[error("Birth time is required")]
    MissingBirthTime,

    #[error("Birth time must be HH:MM, got {0:?}")]
    InvalidBirthTime(String),

    /// Empty, unparsable or non-finite numeric field
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Type alias for Results of form validation
pub type Result<T> = std::result::Result<T, InputError>;
