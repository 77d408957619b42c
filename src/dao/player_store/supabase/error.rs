//! Error types shared by the Supabase storage implementation.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::dao::storage::StorageError;

/// Convenient result alias returning [`SupabaseError`] failures.
pub type SupabaseResult<T> = Result<T, SupabaseError>;

/// Failures that can occur while interacting with the Supabase REST API.
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// Building the HTTP client failed (invalid TLS setup, etc).
    #[error("failed to build Supabase client")]
    ClientBuilder {
        #[source]
        source: reqwest::Error,
    },
    /// A request to a table endpoint could not be sent.
    #[error("failed to send Supabase request to `{path}`")]
    RequestSend {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    /// The response body could not be read.
    #[error("failed to read Supabase response for `{path}`")]
    ReadBody {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    /// Decoding the response body into the expected shape failed.
    #[error("failed to deserialize Supabase response for `{path}`")]
    DeserializeValue {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// Supabase answered with an error status and payload.
    #[error("Supabase responded with status {status} for `{path}`")]
    ErrorResponse {
        path: String,
        status: StatusCode,
        payload: Value,
    },
}

impl From<SupabaseError> for StorageError {
    fn from(err: SupabaseError) -> Self {
        match err {
            SupabaseError::ErrorResponse {
                status, payload, ..
            } => StorageError::rejected(status.as_u16(), payload),
            other => StorageError::unavailable(other.to_string(), other),
        }
    }
}
