use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::{dao::storage::StorageError, llm::LlmError};

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The datastore rejected the call or could not be reached.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The completion API failed or returned an error payload.
    #[error(transparent)]
    Llm(#[from] LlmError),
    /// The completion API answered without any choice.
    #[error("Failed to generate story from OpenAI")]
    NoChoices,
    /// The first completion choice carries no text.
    #[error("completion choice has no message content")]
    MissingContent,
}

/// Application-level errors that are converted to HTTP responses.
///
/// Every upstream failure is a server error answered with 500; only an
/// undecodable JSON request body is a 400.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body declared as JSON but not parseable.
    #[error("{0}")]
    BadRequest(String),
    /// Forward an upstream error object exactly as received.
    #[error("upstream error: {0}")]
    Raw(Value),
    /// Wrap a message into an `{"error": ...}` body.
    #[error("{0}")]
    Message(String),
}

impl AppError {
    /// Surface the raw error object of a failed datastore call.
    pub fn raw_storage(err: &StorageError) -> Self {
        AppError::Raw(err.payload())
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Storage(source) => AppError::Message(source.message()),
            ServiceError::Llm(source) => AppError::Message(source.message()),
            other @ (ServiceError::NoChoices | ServiceError::MissingContent) => {
                AppError::Message(other.to_string())
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        match self {
            AppError::BadRequest(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error })).into_response()
            }
            AppError::Raw(payload) => (status, Json(payload)).into_response(),
            AppError::Message(error) => (status, Json(ErrorBody { error })).into_response(),
        }
    }
}
