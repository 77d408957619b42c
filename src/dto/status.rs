use serde::Serialize;
use utoipa::ToSchema;

/// Banner returned by the `/` route.
pub const RUNNING_MESSAGE: &str = "D&D Game Backend is Running!";

/// Simple liveness response returned by the `/` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    /// Always [`RUNNING_MESSAGE`].
    pub message: String,
}

impl StatusResponse {
    /// Response telling callers the backend is up.
    pub fn running() -> Self {
        Self {
            message: RUNNING_MESSAGE.to_string(),
        }
    }
}
