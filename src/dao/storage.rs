use std::error::Error;

use serde_json::{Value, json};
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by storage backends regardless of the underlying datastore.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The datastore answered with an error payload.
    #[error("datastore rejected request with status {status}")]
    Rejected {
        /// HTTP status of the answer.
        status: u16,
        /// Error object sent by the datastore.
        payload: Value,
    },
    /// The datastore could not be reached or answered with garbage.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// Description of the failure.
        message: String,
        /// Underlying error.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Construct a rejection carrying the datastore's own error object.
    pub fn rejected(status: u16, payload: Value) -> Self {
        StorageError::Rejected { status, payload }
    }

    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }

    /// Human readable message, taken from the datastore payload when there is one.
    pub fn message(&self) -> String {
        match self {
            StorageError::Rejected { payload, .. } => match payload.get("message") {
                Some(Value::String(message)) => message.clone(),
                _ => payload.to_string(),
            },
            StorageError::Unavailable { message, .. } => message.clone(),
        }
    }

    /// Error object as the datastore client would expose it.
    ///
    /// Rejections return the datastore body untouched. Transport failures get a
    /// synthesized object with the same `message`/`details`/`hint`/`code` shape.
    pub fn payload(&self) -> Value {
        match self {
            StorageError::Rejected { payload, .. } => payload.clone(),
            StorageError::Unavailable { message, source } => json!({
                "message": message,
                "details": source_chain(source.as_ref()),
                "hint": "",
                "code": "",
            }),
        }
    }
}

fn source_chain(err: &(dyn Error + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut current = err.source();
    while let Some(cause) = current {
        parts.push(cause.to_string());
        current = cause.source();
    }
    parts.join(": ")
}
