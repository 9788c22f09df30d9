//! Shared error types for the services crate.

use thiserror::Error;

/// Failure talking to an answer service.
///
/// Every variant means the same thing to a quiz: the service is unavailable
/// and the action can be retried. The variants only exist for logging.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServiceError {
    #[error("answer service request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("answer service returned a malformed payload: {0}")]
    Malformed(String),
}

/// Errors emitted by `QuizController`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("answer is empty")]
    EmptyAnswer,
    #[error("no question is pending")]
    NoQuestionPending,
    #[error("a quiz is already in progress")]
    AlreadyInProgress,
    #[error("answer service unavailable: {0}")]
    ServiceUnavailable(#[from] ServiceError),
}

impl QuizError {
    /// True for errors the user can recover from by retrying the same action.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, QuizError::ServiceUnavailable(_))
    }
}
