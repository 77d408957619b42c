//! Error types of the completion client.

use std::error::Error;

use thiserror::Error;

/// Convenient result alias returning [`LlmError`] failures.
pub type LlmResult<T> = Result<T, LlmError>;

/// Failures that can occur while calling the completion API.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Building the HTTP client failed (invalid TLS setup, etc).
    #[error("failed to build completion client")]
    ClientBuilder {
        #[source]
        source: reqwest::Error,
    },
    /// The request could not be sent or the body could not be read.
    #[error("request to `{url}` failed")]
    RequestSend {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The response body was not the JSON the API promises.
    #[error("invalid completion response from `{url}`")]
    DecodeResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    /// The API answered with an error object.
    #[error("{message}")]
    Api { message: String },
}

impl LlmError {
    /// Message exposed to HTTP callers.
    ///
    /// Upstream API messages are forwarded verbatim; local failures include
    /// their root cause.
    pub fn message(&self) -> String {
        match self {
            LlmError::Api { message } => message.clone(),
            other => match other.source() {
                Some(source) => format!("{other}: {source}"),
                None => other.to_string(),
            },
        }
    }
}
