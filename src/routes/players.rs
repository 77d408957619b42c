use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, header::CONTENT_TYPE},
    routing::get,
};

use crate::{
    dto::player::{CreatePlayerRequest, CreatePlayerResponse, PlayerRow},
    error::AppError,
    services::player_service,
    state::SharedState,
};

/// Routes proxying the players table.
pub fn router() -> Router<SharedState> {
    Router::new().route("/players", get(list_players).post(create_player))
}

/// Return every player row stored in the datastore.
#[utoipa::path(
    get,
    path = "/players",
    tag = "players",
    responses(
        (status = 200, description = "All player rows", body = [PlayerRow]),
        (status = 500, description = "Raw datastore error object")
    )
)]
pub async fn list_players(
    State(state): State<SharedState>,
) -> Result<Json<Vec<PlayerRow>>, AppError> {
    let rows = player_service::list_players(&state)
        .await
        .map_err(|err| AppError::raw_storage(&err))?;
    Ok(Json(rows.into_iter().map(PlayerRow).collect()))
}

/// Insert a new player, storing `playerClass` in the `class` column.
#[utoipa::path(
    post,
    path = "/players",
    tag = "players",
    request_body = CreatePlayerRequest,
    responses(
        (status = 200, description = "Player created", body = CreatePlayerResponse),
        (status = 400, description = "Malformed JSON body"),
        (status = 500, description = "Datastore error message")
    )
)]
pub async fn create_player(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CreatePlayerResponse>, AppError> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let payload = CreatePlayerRequest::from_body(content_type, &body)
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    let response = player_service::create_player(&state, payload).await?;
    Ok(Json(response))
}
