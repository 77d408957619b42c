use axum::{Json, Router, routing::get};

use crate::{dto::status::StatusResponse, state::SharedState};

#[utoipa::path(
    get,
    path = "/",
    tag = "status",
    responses((status = 200, description = "Backend is running", body = StatusResponse))
)]
/// Tell callers the backend is up.
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse::running())
}

/// Configure the root route.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/", get(status))
}
