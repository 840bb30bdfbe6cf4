//! Shared error types for the services crate.

use thiserror::Error;

use bagdar_core::model::SessionError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by the recommendation client.
///
/// Network trouble, a non-success status, an empty candidate and a
/// schema-violating body all end up here; the controller treats every
/// variant the same way (abandon the run, back to intro).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecommendationError {
    #[error("recommendation service is not configured")]
    Disabled,
    #[error("recommendation service returned an empty response")]
    EmptyResponse,
    #[error("recommendation service request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("recommendation did not match the expected shape: {0}")]
    MalformedResponse(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by the result reporter. Best-effort by contract: the
/// controller logs these and moves on.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `QuizService`. Only phase-machine misuse surfaces;
/// recommendation and report failures degrade inside the service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
